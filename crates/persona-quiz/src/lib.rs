//! Likert-scale personality quiz: question catalogs, weighted dimension scoring,
//! type-code derivation, and compatibility ranking.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
