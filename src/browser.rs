//! Browser Bindings
//!
//! localStorage, location and history access through web-sys.

use course_progress::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// `KeyValueStore` over `window.localStorage`.
///
/// Holds no JS handles; the storage object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| DomainError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Current `location.search`, empty when unavailable
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Current `location.pathname`, `/` when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Add a history entry without reloading the page
pub fn push_location(url: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let result = win
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url)));
    if let Err(e) = result {
        log::warn!("pushState to {} failed: {:?}", url, e);
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}
