//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e lo stato condiviso necessario per gestire le richieste.

use crate::core::flash::FlashStore;
use crate::repositories::{PoolType, SeriesRepository};
use std::time::Duration;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione delle serie
    pub series: SeriesRepository,

    /// Messaggi flash in attesa, per sessione
    pub flash: FlashStore,
}

impl AppState {
    /// Crea una nuova istanza di AppState a partire dal pool di connessioni
    pub fn new(pool: PoolType) -> Self {
        Self {
            series: SeriesRepository::new(pool),
            flash: FlashStore::new(),
        }
    }

    /// Come `new`, con una durata massima diversa per i messaggi flash non letti
    pub fn with_flash_ttl(pool: PoolType, flash_ttl: Duration) -> Self {
        Self {
            series: SeriesRepository::new(pool),
            flash: FlashStore::with_ttl(flash_ttl),
        }
    }
}
