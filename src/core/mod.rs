//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Configurazione e database
//! - Gestione errori
//! - Sessione, messaggi flash e override del metodo HTTP
//! - Stato applicazione

pub mod config;
pub mod database;
pub mod error;
pub mod flash;
pub mod method_override;
pub mod session;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use flash::{FLASH_SUCCESS, FlashStore};
pub use method_override::method_override_middleware;
pub use session::{Session, session_middleware};
pub use state::AppState;
