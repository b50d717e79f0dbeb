//! Series entity - Entità serie

#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Series {
    /// Assegnato dal database al primo salvataggio, poi immutabile
    id: Option<i32>,
    name: String,
}

impl Series {
    /// Nuova serie non ancora persistita (senza id)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // l'id lo scrive solo il repository dopo l'INSERT
    pub(crate) fn assign_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

/// Riferimento parziale: porta solo l'id, basta per cancellare senza leggere la riga
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRef {
    pub id: i32,
}

impl SeriesRef {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
