use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, PokemonGrid},
        util::api::user_pokemon::list_user_pokemon,
    },
    model::{pokemon::PokemonDto, user_pokemon::UserPokemonQuery},
};

#[component]
pub fn Favorites() -> Element {
    let mut records =
        use_resource(|| async move { list_user_pokemon(&UserPokemonQuery::favorites()).await });

    let pokemon: Option<Vec<PokemonDto>> = records
        .read()
        .as_ref()
        .map(|list| list.iter().filter_map(|record| record.to_pokemon()).collect());

    rsx!(
        Title { "Favorites | Pokédex" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                h1 { class: "text-2xl text-center", "Favorites" }
                match pokemon {
                    Some(pokemon) => rsx! {
                        PokemonGrid {
                            pokemon,
                            empty_message: "You have no favorite Pokémon yet",
                            on_change: move |_| records.restart(),
                        }
                    },
                    None => rsx! {
                        div { class: "flex justify-center p-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
            }
        }
    )
}
