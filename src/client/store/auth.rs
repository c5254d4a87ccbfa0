use dioxus_logger::tracing;

use crate::{client::util::storage, model::auth::decode_user_id};

/// Authentication state shared through a context `Signal`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    /// User ID read from the token payload, `None` when the payload is unreadable
    pub user_id: Option<i32>,
}

impl AuthState {
    /// Restores the state from the token persisted by a previous login.
    pub fn from_storage() -> Self {
        storage::load_token()
            .map(Self::from_token)
            .unwrap_or_default()
    }

    pub fn from_token(token: String) -> Self {
        let user_id = match decode_user_id(&token) {
            Ok(user_id) => Some(user_id),
            Err(err) => {
                tracing::error!("Failed to decode stored token: {}", err);
                None
            }
        };

        Self {
            token: Some(token),
            user_id,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login(&mut self, token: String) {
        storage::save_token(&token);
        *self = Self::from_token(token);
    }

    pub fn logout(&mut self) {
        storage::clear_token();
        *self = Self::default();
    }
}
