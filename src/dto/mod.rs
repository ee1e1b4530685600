//! Request and response shapes for the campaign API.

pub mod campaign;
