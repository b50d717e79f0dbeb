//! Controle de séries - libreria del server, espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod views;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};

use axum::{Router, middleware, routing::{get, post}};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione.
///
/// L'override del metodo sta sul router esterno così agisce prima del
/// routing di quello interno.
pub fn create_router(state: Arc<AppState>) -> Router {
    use crate::core::method_override_middleware;

    let app = Router::new()
        .route("/", get(services::root))
        .nest("/series", configure_series_routes())
        .with_state(state);

    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn(method_override_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Configura le routes per il CRUD delle serie
fn configure_series_routes() -> Router<Arc<AppState>> {
    use crate::core::session_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_series))
        .route("/create", get(show_create_form).post(create_series))
        .route("/delete", post(delete_series_by_query))
        .route("/delete/{id}", axum::routing::delete(delete_series))
        .route("/edit/{id}", get(show_edit_form).patch(update_series))
        .layer(middleware::from_fn(session_middleware))
}
