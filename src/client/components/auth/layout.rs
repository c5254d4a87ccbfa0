use dioxus::prelude::*;

use crate::client::{components::auth::Navbar, router::Route, store::auth::AuthState};

/// Where a signed-in view sends the visitor instead, `None` when it may be shown
pub fn guard_redirect(auth: &AuthState) -> Option<Route> {
    if auth.is_authenticated() {
        None
    } else {
        Some(Route::Login {})
    }
}

/// Guard for the signed-in views, redirecting to the login page without a stored token
#[component]
pub fn AuthLayout() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let navigator = navigator();

    use_effect(move || {
        if let Some(route) = guard_redirect(&auth.read()) {
            navigator.replace(route);
        }
    });

    if guard_redirect(&auth.read()).is_some() {
        return rsx!();
    }

    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_visitor_goes_to_login() {
        assert_eq!(
            guard_redirect(&AuthState::default()),
            Some(Route::Login {})
        );
    }

    #[test]
    fn any_stored_token_passes() {
        let decodable = AuthState::from_token(
            "eyJhbGciOiJIUzI1NiJ9.eyJ1c2VyX2lkIjo1fQ.signature".to_string(),
        );
        let undecodable = AuthState::from_token("not-a-jwt".to_string());

        assert_eq!(decodable.user_id, Some(5));
        assert_eq!(guard_redirect(&decodable), None);
        assert_eq!(guard_redirect(&undecodable), None);
    }
}
