//! Domain aggregates exposed by the campaign service layer.

pub mod campaign;
pub mod types;
