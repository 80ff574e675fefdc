use dioxus::prelude::*;
use tracing::debug;

use super::hover_intent::HoverIntentTimer;
use super::outside_click::use_outside_click;
use super::state::NavState;
use crate::core::site::NAV_LINKS_CONTAINER_ID;

/// Live navigation state plus the handlers the header hands to its triggers.
///
/// The handlers are stable for the lifetime of the owning component, so
/// re-rendering on every hover does not allocate new callbacks.
#[derive(Clone)]
pub struct NavController {
    pub state: Signal<NavState>,
    pub timer: HoverIntentTimer,
    pub on_enter: Callback<String>,
    pub on_leave: Callback<()>,
    pub on_toggle_accordion: Callback<String>,
}

/// Wires [`NavState`] to the outside world: the route-change reset, the
/// deferred dropdown close, the document press listener and unmount cleanup.
pub fn use_nav_controller(current_path: String) -> NavController {
    let mut state = use_signal(NavState::default);
    let timer = use_hook(HoverIntentTimer::default);

    use_effect(use_reactive((&current_path,), move |(path,)| {
        if state.write().route_changed(&path) {
            debug!(%path, "route changed; mobile menu reset");
        }
    }));

    {
        let timer = timer.clone();
        use_outside_click(NAV_LINKS_CONTAINER_ID, move || {
            timer.cancel();
            if state.write().outside_click() {
                debug!("dropdown dismissed by outside press");
            }
        });
    }

    {
        let timer = timer.clone();
        use_drop(move || timer.cancel());
    }

    let on_enter = {
        let timer = timer.clone();
        use_callback(move |category: String| {
            timer.cancel();
            state.write().pointer_enter(&category);
        })
    };

    let on_leave = {
        let timer = timer.clone();
        use_callback(move |_: ()| {
            let ticket = state.write().pointer_leave();
            timer.schedule(state, ticket);
        })
    };

    let on_toggle_accordion = use_callback(move |category: String| {
        state.write().toggle_accordion(&category);
    });

    NavController {
        state,
        timer,
        on_enter,
        on_leave,
        on_toggle_accordion,
    }
}
