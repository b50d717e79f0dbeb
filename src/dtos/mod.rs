//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (form e query string) dalle entities.

pub mod query;
pub mod series;

pub use query::{DeleteSeriesQuery, MethodOverrideQuery};
pub use series::SeriesFormDTO;
