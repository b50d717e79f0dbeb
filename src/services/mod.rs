//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod series;

// Re-exports per facilitare l'import
pub use series::{
    create_series, delete_series, delete_series_by_query, list_series, show_create_form,
    show_edit_form, update_series, SERIES_INDEX,
};

use axum::response::Redirect;

/// Root endpoint - porta alla lista delle serie
pub async fn root() -> Redirect {
    Redirect::to(SERIES_INDEX)
}
