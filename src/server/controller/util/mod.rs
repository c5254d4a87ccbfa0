//! Request extraction helpers shared by controllers.

pub mod auth_user;
