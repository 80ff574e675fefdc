use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use super::state::{CloseTicket, NavState};
use crate::core::site::DROPDOWN_CLOSE_DELAY_MS;
use crate::core::timing;

/// Owns the single deferred dropdown close. Scheduling a new close or calling
/// [`cancel`](Self::cancel) drops whatever task was pending.
#[derive(Clone, Default)]
pub struct HoverIntentTimer {
    pending: Rc<Cell<Option<Task>>>,
}

impl HoverIntentTimer {
    pub fn cancel(&self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Whether a deferred close is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn schedule(&self, mut nav: Signal<NavState>, ticket: CloseTicket) {
        self.cancel();
        let slot = self.pending.clone();
        let task = spawn(async move {
            timing::sleep_ms(DROPDOWN_CLOSE_DELAY_MS).await;
            slot.set(None);
            if nav.write().close_elapsed(ticket) {
                debug!(?ticket, "dropdown closed after hover delay");
            }
        });
        self.pending.set(Some(task));
    }
}
