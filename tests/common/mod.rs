#![allow(dead_code)]

use axum_test::{TestServer, TestServerConfig};
use controle_series::core::{AppState, database};
use std::sync::Arc;
use std::time::Duration;

/// Crea un AppState per i test su un database SQLite in memoria
///
/// # Returns
/// Arc<AppState> con lo schema già migrato e nessuna serie
pub async fn create_test_state() -> Arc<AppState> {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    Arc::new(AppState::new(pool))
}

/// Come `create_test_state`, con una durata diversa per i flash non letti
pub async fn create_test_state_with_flash_ttl(flash_ttl: Duration) -> Arc<AppState> {
    let pool = database::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    Arc::new(AppState::with_flash_ttl(pool, flash_ttl))
}

/// TestServer che non conserva i cookie: ogni richiesta apre una sessione nuova
pub fn create_cookieless_test_server(state: Arc<AppState>) -> TestServer {
    let app = controle_series::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea un TestServer per i test
///
/// I cookie vengono salvati tra una richiesta e l'altra, come farebbe un
/// browser: ogni TestServer corrisponde a una sessione.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = controle_series::create_router(state);
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).expect("Failed to create test server")
}

/// Estrae i nomi delle serie dalla pagina di lista, nell'ordine mostrato
pub fn series_names(html: &str) -> Vec<String> {
    const OPEN: &str = "<span class=\"series-name\">";
    html.split(OPEN)
        .skip(1)
        .filter_map(|chunk| chunk.split_once("</span>").map(|(name, _)| name.to_string()))
        .collect()
}

/// Tutti i messaggi flash mostrati nella pagina, in ordine
pub fn flash_messages(html: &str) -> Vec<String> {
    const OPEN: &str = "<div class=\"alert alert-success\">";
    html.split(OPEN)
        .skip(1)
        .filter_map(|chunk| chunk.split_once("</div>").map(|(message, _)| message.to_string()))
        .collect()
}

/// Primo messaggio flash mostrato nella pagina, se presente
pub fn flash_message(html: &str) -> Option<String> {
    flash_messages(html).into_iter().next()
}
