use dioxus::prelude::*;

use crate::client::{router::Route, store::auth::AuthState};

#[component]
pub fn Navbar() -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let navigator = navigator();

    let trainer = match auth.read().user_id {
        Some(user_id) => format!("Trainer #{}", user_id),
        None => "Trainer".to_string(),
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl",
                    "Pokédex"
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Home {}, "Catalog" } }
                    li { Link { to: Route::Favorites {}, "Favorites" } }
                    li { Link { to: Route::Team {}, "Battle Team" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                p { class: "text-sm", "{trainer}" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        auth.write().logout();
                        navigator.replace(Route::Login {});
                    },
                    "Logout"
                }
            }
        }
    }
}
