use dioxus::prelude::*;

use crate::client::{
    components::auth::AuthLayout,
    routes::{Favorites, Home, Login, NotFound, Team},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},

    #[layout(AuthLayout)]

        #[route("/home")]
        Home {},

        #[route("/favorites")]
        Favorites {},

        #[route("/team")]
        Team {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
