mod blog;
mod calculator;
mod home;
mod not_found;
mod region;

pub use blog::Blog;
pub use calculator::CalculatorDetail;
pub use home::Home;
pub use not_found::{NotFoundPanel, PageNotFound};
pub use region::RegionIndex;
