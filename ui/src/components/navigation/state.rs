//! Transient view state for the site navigation.
//!
//! Three independent pieces of state live here: the mobile drawer flag, the
//! active desktop dropdown and the expanded mobile accordion. The two
//! selections are single `Option`s, so "at most one open" holds structurally.
//!
//! Closing a dropdown on pointer leave is deferred. [`NavState::pointer_leave`]
//! hands out a [`CloseTicket`]; the timer that fires later redeems it through
//! [`NavState::close_elapsed`], which only clears the dropdown if that ticket
//! is still the pending one. Re-entering a trigger or pressing outside the
//! links voids the ticket, so a late timer can never close a dropdown that
//! was re-opened in the meantime.

/// Handle for one scheduled dropdown close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    mobile_open: bool,
    active_dropdown: Option<String>,
    expanded_accordion: Option<String>,
    pending_close: Option<CloseTicket>,
    issued_tickets: u64,
    last_path: Option<String>,
}

impl NavState {
    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn active_dropdown(&self) -> Option<&str> {
        self.active_dropdown.as_deref()
    }

    pub fn expanded_accordion(&self) -> Option<&str> {
        self.expanded_accordion.as_deref()
    }

    pub fn is_dropdown_active(&self, category: &str) -> bool {
        self.active_dropdown() == Some(category)
    }

    pub fn is_accordion_expanded(&self, category: &str) -> bool {
        self.expanded_accordion() == Some(category)
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    /// Menu button.
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Backdrop click or the drawer's own close button.
    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Pointer entered a category trigger: void any pending close and make
    /// `category` the only active dropdown.
    pub fn pointer_enter(&mut self, category: &str) {
        self.pending_close = None;
        if self.active_dropdown() != Some(category) {
            self.active_dropdown = Some(category.to_string());
        }
    }

    /// Pointer left a category trigger. The dropdown stays open until the
    /// returned ticket is redeemed by [`close_elapsed`](Self::close_elapsed).
    pub fn pointer_leave(&mut self) -> CloseTicket {
        self.issued_tickets += 1;
        let ticket = CloseTicket(self.issued_tickets);
        self.pending_close = Some(ticket);
        ticket
    }

    /// The close delay for `ticket` ran out. Returns `true` if the dropdown
    /// was cleared, `false` if the ticket had been voided.
    pub fn close_elapsed(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close != Some(ticket) {
            return false;
        }
        self.pending_close = None;
        self.active_dropdown = None;
        true
    }

    /// A press landed outside the desktop links container. Clears the
    /// dropdown immediately regardless of pending timers.
    pub fn outside_click(&mut self) -> bool {
        self.pending_close = None;
        self.active_dropdown.take().is_some()
    }

    /// Accordion header activated: collapse it if it is the expanded one,
    /// otherwise expand it in place of whatever was open.
    pub fn toggle_accordion(&mut self, category: &str) {
        if self.is_accordion_expanded(category) {
            self.expanded_accordion = None;
        } else {
            self.expanded_accordion = Some(category.to_string());
        }
    }

    /// Record the current location. When it differs from the last one seen,
    /// the drawer closes and the accordion collapses; returns whether that
    /// reset happened.
    pub fn route_changed(&mut self, path: &str) -> bool {
        if self.last_path.as_deref() == Some(path) {
            return false;
        }
        self.last_path = Some(path.to_string());
        self.mobile_open = false;
        self.expanded_accordion = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = NavState::default();
        assert!(!state.mobile_open());
        assert_eq!(state.active_dropdown(), None);
        assert_eq!(state.expanded_accordion(), None);
        assert_eq!(state.pending_close(), None);
    }

    #[test]
    fn menu_button_toggles_and_backdrop_closes() {
        let mut state = NavState::default();
        state.toggle_mobile();
        assert!(state.mobile_open());
        state.toggle_mobile();
        assert!(!state.mobile_open());

        state.toggle_mobile();
        state.close_mobile();
        assert!(!state.mobile_open());
        state.close_mobile();
        assert!(!state.mobile_open());
    }

    #[test]
    fn entering_another_trigger_replaces_the_active_dropdown() {
        let mut state = NavState::default();
        state.pointer_enter("US Tools");
        state.pointer_enter("UK Tools");
        assert_eq!(state.active_dropdown(), Some("UK Tools"));
        assert!(!state.is_dropdown_active("US Tools"));
    }

    #[test]
    fn re_entry_voids_the_pending_close() {
        let mut state = NavState::default();
        state.pointer_enter("US Tools");
        let ticket = state.pointer_leave();
        state.pointer_enter("US Tools");

        assert!(!state.close_elapsed(ticket));
        assert_eq!(state.active_dropdown(), Some("US Tools"));
    }

    #[test]
    fn only_the_latest_ticket_closes() {
        let mut state = NavState::default();
        state.pointer_enter("Canada");
        let first = state.pointer_leave();
        let second = state.pointer_leave();
        assert_ne!(first, second);

        assert!(!state.close_elapsed(first));
        assert_eq!(state.active_dropdown(), Some("Canada"));
        assert!(state.close_elapsed(second));
        assert_eq!(state.active_dropdown(), None);
        assert!(!state.close_elapsed(second));
    }

    #[test]
    fn outside_click_clears_and_voids_timer() {
        let mut state = NavState::default();
        state.pointer_enter("UK Tools");
        let ticket = state.pointer_leave();

        assert!(state.outside_click());
        assert_eq!(state.active_dropdown(), None);
        assert_eq!(state.pending_close(), None);
        assert!(!state.close_elapsed(ticket));
        assert!(!state.outside_click());
    }

    #[test]
    fn accordion_toggle_is_exclusive() {
        let mut state = NavState::default();
        state.toggle_accordion("US Tools");
        state.toggle_accordion("Australia");
        assert_eq!(state.expanded_accordion(), Some("Australia"));
        state.toggle_accordion("Australia");
        assert_eq!(state.expanded_accordion(), None);
    }

    #[test]
    fn same_path_does_not_reset() {
        let mut state = NavState::default();
        assert!(state.route_changed("/us"));
        state.toggle_mobile();
        state.toggle_accordion("Canada");

        assert!(!state.route_changed("/us"));
        assert!(state.mobile_open());
        assert_eq!(state.expanded_accordion(), Some("Canada"));
    }

    #[test]
    fn route_change_leaves_dropdown_alone() {
        let mut state = NavState::default();
        state.route_changed("/");
        state.pointer_enter("US Tools");
        state.route_changed("/us");
        assert_eq!(state.active_dropdown(), Some("US Tools"));
    }
}
