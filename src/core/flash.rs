//! Flash store - messaggi usa-e-getta legati alla sessione
//!
//! Ogni coppia (sessione, categoria) accumula i messaggi fino alla lettura.
//! `take_and_clear` li rimuove in modo atomico: due richieste concorrenti
//! della stessa sessione non possono leggerli entrambe.
//! Le voci mai lette (client che ignorano i cookie) scadono dopo `ttl`.

use crate::core::session::Session;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};
use uuid::Uuid;

pub const FLASH_SUCCESS: &str = "success";

/// Un redirect viene seguito subito: pochi minuti bastano
pub const DEFAULT_FLASH_TTL: Duration = Duration::from_secs(5 * 60);

struct FlashEntry {
    messages: Vec<String>,
    updated_at: Instant,
}

impl FlashEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.updated_at.elapsed() >= ttl
    }
}

pub struct FlashStore {
    messages: DashMap<(Uuid, String), FlashEntry>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_FLASH_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        FlashStore {
            messages: DashMap::new(),
            ttl,
        }
    }

    /// Accoda il messaggio a quelli non ancora letti della stessa categoria
    #[instrument(skip(self, session, message))]
    pub fn set(&self, session: &Session, key: &str, message: impl Into<String>) {
        self.purge_expired();

        let mut entry = self
            .messages
            .entry((session.id(), key.to_string()))
            .or_insert_with(|| FlashEntry {
                messages: Vec::new(),
                updated_at: Instant::now(),
            });
        entry.messages.push(message.into());
        entry.updated_at = Instant::now();
        drop(entry);

        debug!(
            "Flash message set for session {}, {} entries pending",
            session.id(),
            self.pending_count()
        );
    }

    /// Restituisce e rimuove tutti i messaggi della categoria, in ordine di inserimento
    #[instrument(skip(self, session))]
    pub fn take_and_clear(&self, session: &Session, key: &str) -> Vec<String> {
        match self.messages.remove(&(session.id(), key.to_string())) {
            Some((_, entry)) if !entry.is_expired(self.ttl) => entry.messages,
            _ => Vec::new(),
        }
    }

    /// Numero di voci (sessione, categoria) in attesa di essere lette
    pub fn pending_count(&self) -> usize {
        self.messages.len()
    }

    fn purge_expired(&self) {
        let ttl = self.ttl;
        self.messages.retain(|_, entry| !entry.is_expired(ttl));
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new()
    }
}
