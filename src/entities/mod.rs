//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod series;

// Re-exports per facilitare l'import
pub use series::{Series, SeriesRef};
