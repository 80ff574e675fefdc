//! Path helpers shared by links and active-state highlighting.

use super::site::HOME_PATH;

/// Destination of a calculator page.
pub fn calculator_href(region_key: &str, slug: &str) -> String {
    format!("/{region_key}/{slug}")
}

/// Whether `path` should be highlighted while the browser sits on `current`.
///
/// Home only matches itself; every other path matches by prefix.
pub fn is_active(current: &str, path: &str) -> bool {
    if path == HOME_PATH {
        current == HOME_PATH
    } else {
        current.starts_with(path)
    }
}
