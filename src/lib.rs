//! Artikel Backend Library
//!
//! Exposes core modules for use by the server binary and integration tests.

pub mod app;
pub mod auth;
pub mod blog;
pub mod config;
pub mod middleware;
