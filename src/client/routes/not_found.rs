use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not Found | Pokédex" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "Page not found" }
                p { class: "opacity-70", "Nothing lives at {path}" }
                Link { to: Route::Login {}, class: "btn btn-primary", "Back to the Pokédex" }
            }
        }
    )
}
