use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{Page, PokemonGrid},
        util::api::pokemon::{
            filter_by_generation, filter_by_type, filter_combined, get_generations,
            get_pokemon_page, get_types, search_by_name,
        },
    },
    model::{
        listing::{ListingQuery, ListingState},
        pokemon::{generation_display_name, PokemonDto, ALL_SENTINEL},
    },
};

#[component]
pub fn Home() -> Element {
    let mut listing = use_signal(ListingState::default);
    let mut search_input = use_signal(String::new);

    let types = use_resource(get_types);
    let generations = use_resource(get_generations);

    let query = use_memo(move || listing.read().query());

    let results = use_resource(move || async move {
        match query() {
            ListingQuery::Search { name } => {
                let found = search_by_name(&name).await;
                listing.write().apply_filtered();
                found.into_iter().collect::<Vec<PokemonDto>>()
            }
            ListingQuery::Combined {
                generation_id,
                type_id,
            } => {
                let results = if generation_id == ALL_SENTINEL {
                    filter_by_type(type_id).await
                } else if type_id == ALL_SENTINEL {
                    filter_by_generation(generation_id).await
                } else {
                    filter_combined(generation_id, type_id).await
                };
                listing.write().apply_filtered();
                results
            }
            ListingQuery::Page { offset, limit } => {
                let page = get_pokemon_page(offset, limit).await;
                listing
                    .write()
                    .apply_page(page.next.as_deref(), page.previous.as_deref());
                page.results
            }
        }
    });

    let type_options = types.read().clone().unwrap_or_default();
    let generation_options = generations.read().clone().unwrap_or_default();
    let state = listing.read().clone();

    let empty_message = match query() {
        ListingQuery::Search { .. } => "No Pokémon goes by that name",
        ListingQuery::Combined { .. } => "No Pokémon matches these filters",
        ListingQuery::Page { .. } => "No Pokémon to show",
    };

    rsx!(
        Title { "Catalog | Pokédex" }
        Meta {
            name: "description",
            content: "Browse the Pokémon catalog by type, generation, or name."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex flex-wrap gap-2 items-center justify-center",
                    form {
                        class: "join",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            listing.write().set_search(search_input());
                        },
                        input {
                            class: "input join-item",
                            r#type: "search",
                            placeholder: "Search by name",
                            value: "{search_input}",
                            oninput: move |evt| {
                                let value = evt.value();
                                let cleared = value.trim().is_empty()
                                    && !listing.peek().search_term.is_empty();
                                search_input.set(value);
                                if cleared {
                                    listing.write().set_search("");
                                }
                            },
                        }
                        button { class: "btn btn-primary join-item", r#type: "submit", "Search" }
                    }
                    select {
                        class: "select w-48",
                        value: "{state.selected_type}",
                        onchange: move |evt| {
                            let type_id = evt.value().parse().unwrap_or(ALL_SENTINEL);
                            search_input.set(String::new());
                            listing.write().select_type(type_id);
                        },
                        option { value: "{ALL_SENTINEL}", "All types" }
                        for kind in type_options {
                            option { key: "{kind.id}", value: "{kind.id}", class: "capitalize", "{kind.name}" }
                        }
                    }
                    select {
                        class: "select w-48",
                        value: "{state.selected_generation}",
                        onchange: move |evt| {
                            let generation_id = evt.value().parse().unwrap_or(ALL_SENTINEL);
                            search_input.set(String::new());
                            listing.write().select_generation(generation_id);
                        },
                        option { value: "{ALL_SENTINEL}", "All generations" }
                        for generation in generation_options {
                            option {
                                key: "{generation.id}",
                                value: "{generation.id}",
                                {generation_display_name(generation.id)}
                            }
                        }
                    }
                    if state.filter_active() || !state.search_term.is_empty() {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                search_input.set(String::new());
                                listing.write().reset();
                            },
                            "Clear"
                        }
                    }
                }
                match &*results.read() {
                    Some(pokemon) => rsx! {
                        PokemonGrid { pokemon: pokemon.clone(), empty_message }
                    },
                    None => rsx! {
                        div { class: "flex justify-center p-8",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
                if matches!(query(), ListingQuery::Page { .. }) {
                    div { class: "join self-center",
                        button {
                            class: "join-item btn",
                            disabled: !state.has_previous,
                            onclick: move |_| {
                                listing.write().previous_page();
                            },
                            Icon { width: 16, height: 16, icon: FaChevronLeft }
                        }
                        button { class: "join-item btn btn-disabled", "Page {state.page}" }
                        button {
                            class: "join-item btn",
                            disabled: !state.has_next,
                            onclick: move |_| {
                                listing.write().next_page();
                            },
                            Icon { width: 16, height: 16, icon: FaChevronRight }
                        }
                    }
                }
            }
        }
    )
}
