//! Series DTOs - Data Transfer Objects per i form delle serie

use crate::entities::Series;
use serde::{Deserialize, Serialize};

/// Campi del form di creazione/modifica.
/// `name` mancante non è un errore: viene salvato come stringa vuota.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SeriesFormDTO {
    #[serde(default)]
    pub name: Option<String>,
}

impl SeriesFormDTO {
    pub fn name_or_empty(self) -> String {
        self.name.unwrap_or_default()
    }
}

impl From<SeriesFormDTO> for Series {
    fn from(value: SeriesFormDTO) -> Self {
        Series::new(value.name_or_empty())
    }
}
