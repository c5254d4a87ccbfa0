use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, PokemonGrid},
        util::api::user_pokemon::list_user_pokemon,
    },
    model::{
        pokemon::PokemonDto,
        user_pokemon::{UserPokemonQuery, TEAM_SIZE_LIMIT},
    },
};

#[component]
pub fn Team() -> Element {
    let mut records =
        use_resource(|| async move { list_user_pokemon(&UserPokemonQuery::team()).await });

    let pokemon: Option<Vec<PokemonDto>> = records
        .read()
        .as_ref()
        .map(|list| list.iter().filter_map(|record| record.to_pokemon()).collect());
    let size = pokemon.as_ref().map(Vec::len).unwrap_or_default();

    rsx!(
        Title { "Battle Team | Pokédex" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex items-center justify-center gap-2",
                    h1 { class: "text-2xl", "Battle Team" }
                    span { class: "badge badge-neutral", "{size} / {TEAM_SIZE_LIMIT}" }
                }
                match pokemon {
                    Some(pokemon) => rsx! {
                        PokemonGrid {
                            pokemon,
                            empty_message: "Your battle team is empty",
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
