use dioxus::prelude::*;

use crate::client::{router::Route, store::auth::AuthState};

static DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
static TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AuthState::from_storage()));

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        Router::<Route> {}
    }
}
