//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono scritte con `sqlx::query_as::<_, T>` + `.bind(...)`: il controllo
//! avviene a runtime, così la build non richiede un database raggiungibile.
//!
//!   Numero di righe   Metodo                 Ritorna
//!   nessuna           .execute(..)           QueryResult (rows_affected, last_insert_rowid)
//!   zero o una        .fetch_optional(..)    Option<T>
//!   esattamente una   .fetch_one(..)         T, RowNotFound altrimenti
//!   molte             .fetch_all(..)         Vec<T>

pub mod series;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Delete, Persist, Read, ReadAll};

pub use series::{SeriesRepository, SeriesUnitOfWork};

// alias di tipo per il pool, per semplificare lo switch in caso in cui vogliamo usare un altro db
pub type PoolType = sqlx::SqlitePool;
