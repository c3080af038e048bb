//! Accommodation Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Accommodation ID type
pub type AccommodationId = RecordId;

/// Accommodation model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AccommodationId>,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: i64,
}

/// Create accommodation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationCreate {
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Update accommodation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
