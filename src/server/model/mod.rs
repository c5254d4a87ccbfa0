//! Server application models and type definitions.
//!
//! Application state shared by every handler and type aliases over the `entity` crate models.

pub mod app;
pub mod db;
