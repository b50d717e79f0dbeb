//! Query DTOs - Data Transfer Objects per i parametri in query string

use serde::{Deserialize, Serialize};

/// DTO per `POST /series/delete?id=...`
#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteSeriesQuery {
    pub id: i32,
}

/// DTO per l'override del metodo HTTP dai form HTML (`?_method=PATCH`)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MethodOverrideQuery {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,
}
