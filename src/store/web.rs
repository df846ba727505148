//! Browser `localStorage` / `sessionStorage` store.
//!
//! The `web_sys::Storage` handle is looked up on every call, the same way the
//! dark mode preference is read, so the store itself holds no JS object and
//! stays `Send + Sync`. Requires a browser environment.

use wasm_bindgen::{JsCast, JsValue};

use super::{Store, StoreError};

/// Which of the window's storage areas to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebStorage {
    Local,
    Session,
}

impl WebStorage {
    fn handle(self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        match storage {
            Ok(Some(storage)) => Ok(storage),
            // Access can throw (sandboxed iframes, disabled cookies).
            Ok(None) | Err(_) => Err(StoreError::Unavailable),
        }
    }
}

impl Store for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.handle()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.handle()?.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.handle()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(dom) if matches!(dom.name().as_str(), "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") => {
            StoreError::QuotaExceeded
        }
        Some(dom) => StoreError::Backend(format!("{}: {}", dom.name(), dom.message())),
        None => StoreError::Backend(format!("{err:?}")),
    }
}
