//! Bearer token persistence in the browser's local storage.
//!
//! The token is stored raw under [`TOKEN_KEY`]. Outside the browser every operation is a no-op.

pub static TOKEN_KEY: &str = "token";

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn save_token(token: &str) {
    use dioxus_logger::tracing;
    use gloo_storage::{LocalStorage, Storage};

    if let Err(err) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
        tracing::error!("Failed to store token: {:?}", err);
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn clear_token() {
    use gloo_storage::{LocalStorage, Storage};

    LocalStorage::delete(TOKEN_KEY);
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn load_token() -> Option<String> {
    None
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn save_token(_token: &str) {}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn clear_token() {}
