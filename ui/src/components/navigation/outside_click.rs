//! Document-level press listener used to dismiss the desktop dropdown.
//!
//! The listener runs in the webview/browser through `document::eval` and
//! reports each press that lands outside the container back over the eval
//! channel. It is removed again when the owning component unmounts.

use dioxus::prelude::*;
use tracing::{debug, warn};

/// Message the script sends for a press outside the container.
pub const OUTSIDE_PRESS: &str = "outside";

const LISTENER_SCRIPT: &str = r#"
if (window.__metricNavOutsideClick) {
  window.__metricNavOutsideClick();
}
const containerId = "__CONTAINER_ID__";
const onPress = (event) => {
  const container = document.getElementById(containerId);
  if (container && !container.contains(event.target)) {
    dioxus.send("outside");
  }
};
document.addEventListener("mousedown", onPress);
window.__metricNavOutsideClick = () => {
  document.removeEventListener("mousedown", onPress);
  delete window.__metricNavOutsideClick;
};
"#;

const TEARDOWN_SCRIPT: &str = r#"
if (window.__metricNavOutsideClick) {
  window.__metricNavOutsideClick();
}
"#;

pub fn listener_script(container_id: &str) -> String {
    LISTENER_SCRIPT.replace("__CONTAINER_ID__", container_id)
}

/// Calls `on_outside` for every press outside the element with
/// `container_id`, for as long as the calling component is mounted.
pub fn use_outside_click(container_id: &'static str, mut on_outside: impl FnMut() + 'static) {
    use_hook(move || {
        spawn(async move {
            let mut listener = document::eval(&listener_script(container_id));
            loop {
                match listener.recv::<String>().await {
                    Ok(message) if message == OUTSIDE_PRESS => on_outside(),
                    Ok(message) => debug!(%message, "ignoring outside-click message"),
                    Err(err) => {
                        warn!(?err, "outside-click listener stopped");
                        break;
                    }
                }
            }
        })
    });

    use_drop(|| {
        document::eval(TEARDOWN_SCRIPT);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_the_requested_container() {
        let script = listener_script("site-nav-links");
        assert!(script.contains(r#"const containerId = "site-nav-links";"#));
        assert!(!script.contains("__CONTAINER_ID__"));
    }

    #[test]
    fn script_reports_the_expected_message() {
        let script = listener_script("x");
        assert!(script.contains(&format!("dioxus.send(\"{OUTSIDE_PRESS}\")")));
        assert!(script.contains("removeEventListener(\"mousedown\""));
    }
}
