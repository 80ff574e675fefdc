//! Shared stylesheet, embedded so every platform shell can inline it.

pub const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
