//! Session persistence for the language choice.
//!
//! In the browser this is `sessionStorage`, so the choice survives page
//! reloads but not a new tab. Native builds keep it for the process
//! lifetime.

const LANGUAGE_KEY: &str = "openatlas.language";

#[cfg(target_arch = "wasm32")]
pub fn load_language() -> Option<String> {
    session_storage()?.get_item(LANGUAGE_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn save_language(code: &str) {
    let Some(storage) = session_storage() else {
        return;
    };
    if storage.set_item(LANGUAGE_KEY, code).is_err() {
        tracing::warn!(key = LANGUAGE_KEY, "sessionStorage rejected the language choice");
    }
}

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
static SESSION: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

#[cfg(not(target_arch = "wasm32"))]
pub fn load_language() -> Option<String> {
    SESSION.lock().ok().and_then(|slot| slot.clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_language(code: &str) {
    match SESSION.lock() {
        Ok(mut slot) => *slot = Some(code.to_string()),
        Err(_) => tracing::warn!(key = LANGUAGE_KEY, "session store poisoned; choice not saved"),
    }
}
