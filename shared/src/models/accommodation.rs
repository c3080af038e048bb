//! Accommodation Model

use serde::{Deserialize, Serialize};

/// Accommodation entity (lodging property: hotel, pension, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: Option<String>,
    pub name: String,
    pub contact: Option<String>,
    pub details: Option<String>,
    pub created_at: i64,
}
