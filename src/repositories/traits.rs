//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Reads and immediate deletes go through the repository, buffered writes
//! through a unit of work that must be flushed before it is dropped.

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    /// Reads all entities, in insertion order
    async fn find_all(&self) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for deleting entities immediately
pub trait Delete<Id> {
    /// Deletes an entity by primary key. Deleting a missing key is not an error.
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}

/// Trait for write-behind persistence inside a unit of work
///
/// # Type Parameters
/// * `Entity` - Type of the persisted entity
/// * `Ref` - Partial reference used to remove an entity without loading it
pub trait Persist<Entity, Ref> {
    /// Inserts the entity if it has no id (assigning it), updates it otherwise.
    /// With `flush = false` the write stays pending until [`Persist::flush`].
    async fn save(&mut self, entity: &mut Entity, flush: bool) -> Result<(), sqlx::Error>;

    /// Removes the entity identified by the reference
    async fn remove(&mut self, reference: Ref, flush: bool) -> Result<(), sqlx::Error>;

    /// Commits every pending write
    async fn flush(&mut self) -> Result<(), sqlx::Error>;
}
