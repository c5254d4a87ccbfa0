use dioxus::prelude::*;

use crate::{client::components::PokemonCard, model::pokemon::PokemonDto};

#[component]
pub fn PokemonGrid(
    pokemon: Vec<PokemonDto>,
    empty_message: &'static str,
    on_change: Option<EventHandler<()>>,
) -> Element {
    if pokemon.is_empty() {
        return rsx!(
            p { class: "text-center opacity-70 p-8",
                "{empty_message}"
            }
        );
    }

    rsx!(
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
            for entry in pokemon {
                PokemonCard {
                    key: "{entry.id}",
                    pokemon: entry.clone(),
                    on_change: move |_| {
                        if let Some(handler) = on_change {
                            handler.call(());
                        }
                    }
                }
            }
        }
    )
}
