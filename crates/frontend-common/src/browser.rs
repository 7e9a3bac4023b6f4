//! Window plumbing: URL inspection, scrubbing, and redirects

use tracing::warn;
use url::Url;
use wasm_bindgen::JsValue;

/// Current page URL, when the window exposes one we can parse.
pub fn current_url() -> Option<Url> {
    let href = web_sys::window()?.location().href().ok()?;
    Url::parse(&href).ok()
}

/// Rewrite the address bar without a navigation.
///
/// Used after credential extraction so a reload does not resend the
/// handoff parameters.
pub fn replace_url(url: &Url) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
            {
                warn!(?err, "failed to rewrite the address bar");
            }
        }
        Err(err) => warn!(?err, "history API unavailable"),
    }
}

/// Leave the application for `target`.
pub fn navigate_to(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(target) {
            warn!(?err, "redirect failed");
        }
    }
}
