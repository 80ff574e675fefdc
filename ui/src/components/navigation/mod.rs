mod categories;
mod controller;
mod hover_intent;
mod outside_click;
mod state;
mod view;

pub use categories::{nav_categories, NavCategory, NavLink};
pub use controller::{use_nav_controller, NavController};
pub use hover_intent::HoverIntentTimer;
pub use outside_click::{listener_script, use_outside_click, OUTSIDE_PRESS};
pub use state::{CloseTicket, NavState};
pub use view::Navigation;
