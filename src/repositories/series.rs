//! SeriesRepository - Repository per la gestione delle serie

use super::{Delete, Persist, PoolType, Read, ReadAll};
use crate::entities::{Series, SeriesRef};
use sqlx::{Error, Sqlite, Transaction};
use tracing::{debug, info, instrument};

pub struct SeriesRepository {
    connection_pool: PoolType,
}

impl SeriesRepository {
    pub fn new(connection_pool: PoolType) -> SeriesRepository {
        Self { connection_pool }
    }

    /// Apre una unit of work per la richiesta corrente.
    /// La transazione parte solo alla prima scrittura.
    pub fn begin(&self) -> SeriesUnitOfWork {
        SeriesUnitOfWork {
            connection_pool: self.connection_pool.clone(),
            tx: None,
        }
    }
}

impl ReadAll<Series> for SeriesRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Series>, Error> {
        let series = sqlx::query_as::<_, Series>("SELECT id, name FROM series ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Loaded {} series", series.len());
        Ok(series)
    }
}

impl Read<Series, i32> for SeriesRepository {
    async fn read(&self, id: &i32) -> Result<Option<Series>, Error> {
        let series = sqlx::query_as::<_, Series>("SELECT id, name FROM series WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(series)
    }
}

impl Delete<i32> for SeriesRepository {
    /// Nessun controllo di esistenza: un id sconosciuto cancella zero righe
    #[instrument(skip(self))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        debug!("Deleted {} rows", result.rows_affected());
        Ok(())
    }
}

/// Unit of work legata a una singola richiesta.
///
/// Le scritture con `flush = false` restano nella transazione aperta finché
/// non si chiama `flush()`. Se la unit of work viene droppata senza flush la
/// transazione fa rollback.
pub struct SeriesUnitOfWork {
    connection_pool: PoolType,
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SeriesUnitOfWork {
    async fn transaction(&mut self) -> Result<&mut Transaction<'static, Sqlite>, Error> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.connection_pool.begin().await?,
        };
        Ok(self.tx.insert(tx))
    }

    /// Legge una serie vedendo anche le scritture non ancora confermate
    pub async fn find(&mut self, id: &i32) -> Result<Option<Series>, Error> {
        let query = sqlx::query_as::<_, Series>("SELECT id, name FROM series WHERE id = ?").bind(id);
        let series = match self.tx.as_mut() {
            Some(tx) => query.fetch_optional(&mut **tx).await?,
            None => query.fetch_optional(&self.connection_pool).await?,
        };

        Ok(series)
    }

    /// true se ci sono scritture in attesa di flush
    pub fn has_pending_changes(&self) -> bool {
        self.tx.is_some()
    }
}

impl Persist<Series, SeriesRef> for SeriesUnitOfWork {
    #[instrument(skip(self, series), fields(id = ?series.id()))]
    async fn save(&mut self, series: &mut Series, flush: bool) -> Result<(), Error> {
        let tx = self.transaction().await?;

        match series.id() {
            None => {
                let result = sqlx::query("INSERT INTO series (name) VALUES (?)")
                    .bind(series.name())
                    .execute(&mut **tx)
                    .await?;

                // l'id resta i32: oltre i32::MAX l'inserimento fallisce invece di troncare
                let new_id = i32::try_from(result.last_insert_rowid())
                    .map_err(|e| Error::Decode(Box::new(e)))?;
                series.assign_id(new_id);
                debug!("Inserted series {}", new_id);
            }
            Some(id) => {
                let result = sqlx::query("UPDATE series SET name = ? WHERE id = ?")
                    .bind(series.name())
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(Error::RowNotFound);
                }
                debug!("Updated series {}", id);
            }
        }

        if flush {
            self.flush().await?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&mut self, reference: SeriesRef, flush: bool) -> Result<(), Error> {
        let tx = self.transaction().await?;
        sqlx::query("DELETE FROM series WHERE id = ?")
            .bind(reference.id)
            .execute(&mut **tx)
            .await?;

        if flush {
            self.flush().await?;
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), Error> {
        if !self.has_pending_changes() {
            debug!("Nothing to flush");
            return Ok(());
        }
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            info!("Unit of work committed");
        }
        Ok(())
    }
}
