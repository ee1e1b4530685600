//! Database models, configuration and auth plumbing.

pub mod auth;
pub mod campaign;
pub mod config;
