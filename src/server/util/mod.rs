//! Utility helpers for server operations.
//!
//! Token signing and verification, password hashing and input checks shared by the services
//! and the request extractor.

pub mod jwt;
pub mod password;
pub mod validate;
