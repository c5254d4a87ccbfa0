use dioxus::prelude::*;
use dioxus_free_icons::icons::{fa_regular_icons, fa_solid_icons};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::util::api::{
        pokemon::get_pokemon,
        user_pokemon::{find_user_pokemon, toggle_user_pokemon_status},
        ApiError,
    },
    model::{
        pokemon::PokemonDto,
        user_pokemon::{PokemonSnapshot, ToggleField, UserPokemonDto},
    },
};

/// Catalog card with favorite and battle team toggles.
///
/// Entries from the paginated listing carry no types, those are fetched once the card mounts.
#[component]
pub fn PokemonCard(pokemon: PokemonDto, on_change: Option<EventHandler<()>>) -> Element {
    let mut types = use_signal(|| pokemon.types.clone());
    let mut record = use_signal(|| None::<UserPokemonDto>);
    let mut pending = use_signal(|| false);

    let id = pokemon.id;
    let snapshot = PokemonSnapshot::from(&pokemon);

    use_future(move || async move {
        if types.peek().is_empty() {
            if let Some(details) = get_pokemon(id).await {
                types.set(details.types);
            }
        }
    });

    use_future(move || async move {
        record.set(find_user_pokemon(&id.to_string()).await);
    });

    let toggle = use_callback(move |field: ToggleField| {
        if *pending.peek() {
            return;
        }
        pending.set(true);

        let snapshot = snapshot.clone();
        spawn(async move {
            let current = record.peek().clone();

            let result = toggle_user_pokemon_status(current.as_ref(), &snapshot, field).await;
            pending.set(false);

            match result {
                Ok(updated) => {
                    record.set(updated);
                    if let Some(handler) = on_change {
                        handler.call(());
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to toggle {:?} for {}: {}", field, snapshot.name, err);
                    alert(&toggle_failure_message(field, &err)).await;
                }
            }
        });
    });

    let favorite = record.read().as_ref().is_some_and(|r| r.favorite);
    let team = record.read().as_ref().is_some_and(|r| r.team);

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            figure { class: "bg-base-200",
                img {
                    class: "w-40 h-40 object-contain",
                    src: "{pokemon.image_url}",
                    alt: "{pokemon.name}",
                }
            }
            div { class: "card-body items-center text-center",
                p { class: "text-xs opacity-60", "#{pokemon.id}" }
                h2 { class: "card-title capitalize", "{pokemon.name}" }
                div { class: "flex flex-wrap gap-1 justify-center",
                    if types.read().is_empty() {
                        div { class: "skeleton h-5 w-16" }
                    }
                    for kind in types.read().iter() {
                        span { class: "badge badge-outline capitalize", "{kind}" }
                    }
                }
                div { class: "card-actions justify-center mt-2",
                    button {
                        class: "btn btn-sm btn-ghost",
                        title: "Favorite",
                        disabled: pending(),
                        onclick: move |_| toggle.call(ToggleField::Favorite),
                        if favorite {
                            Icon { width: 20, height: 20, icon: fa_solid_icons::FaHeart }
                        } else {
                            Icon { width: 20, height: 20, icon: fa_regular_icons::FaHeart }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        title: "Battle team",
                        disabled: pending(),
                        onclick: move |_| toggle.call(ToggleField::Team),
                        if team {
                            Icon { width: 20, height: 20, icon: fa_solid_icons::FaStar }
                        } else {
                            Icon { width: 20, height: 20, icon: fa_regular_icons::FaStar }
                        }
                    }
                }
            }
        }
    )
}

fn toggle_failure_message(field: ToggleField, err: &ApiError) -> String {
    match (field, err.status()) {
        (ToggleField::Team, Some(403)) => "Your battle team is full".to_string(),
        (ToggleField::Favorite, _) => "Could not update your favorites, please try again".to_string(),
        (ToggleField::Team, _) => "Could not update your battle team, please try again".to_string(),
    }
}

async fn alert(message: &str) {
    if let Err(err) = document::eval(&format!("alert({:?})", message)).await {
        tracing::error!("Failed to show alert: {:?}", err);
    }
}
