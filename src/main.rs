use controle_series::core::database;
use controle_series::{AppState, Config, create_router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("controle_series=debug,tower_http=info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    let pool = database::connect(&config).await?;
    database::migrate(&pool).await?;

    let state = Arc::new(AppState::with_flash_ttl(
        pool,
        Duration::from_secs(config.flash_ttl_secs),
    ));
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
