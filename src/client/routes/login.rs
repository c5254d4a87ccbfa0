use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::Page,
        router::Route,
        store::auth::AuthState,
        util::api::{auth::obtain_token, ApiError},
    },
    model::auth::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let navigator = navigator();

    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Signed-in users go straight to the catalog, including right after a successful login
    use_effect(move || {
        if auth.read().is_authenticated() {
            navigator.replace(Route::Home {});
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let credentials = LoginDto {
            login: login().trim().to_string(),
            password: password(),
        };

        if let Err(message) = validate_credentials(&credentials) {
            error.set(Some(message.to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match obtain_token(&credentials).await {
                Ok(tokens) => {
                    error.set(None);
                    auth.write().login(tokens.access);
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    error.set(Some(login_failure_message(&err)));
                }
            }

            submitting.set(false);
        });
    };

    rsx!(
        Title { "Login | Pokédex" }
        Meta {
            name: "description",
            content: "Browse the Pokémon catalog and build your battle team."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-96",
                form { class: "card-body gap-3",
                    onsubmit,
                    h2 { class: "card-title justify-center text-2xl", "Pokédex" }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Login",
                        autocomplete: "username",
                        value: "{login}",
                        oninput: move |evt| login.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error", role: "alert",
                            span { "{message}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner" }
                        }
                        "Login"
                    }
                }
            }
        }
    )
}

fn validate_credentials(credentials: &LoginDto) -> Result<(), &'static str> {
    match (credentials.login.is_empty(), credentials.password.is_empty()) {
        (true, true) => Err("Login and password are required"),
        (true, false) => Err("Login is required"),
        (false, true) => Err("Password is required"),
        (false, false) => Ok(()),
    }
}

fn login_failure_message(err: &ApiError) -> String {
    match err.status() {
        Some(401) => "Invalid login or password".to_string(),
        _ => "Could not reach the server, please try again".to_string(),
    }
}
