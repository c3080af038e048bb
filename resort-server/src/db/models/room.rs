//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Room ID type
pub type RoomId = RecordId;

/// Room type offered by an accommodation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoomId>,
    /// Owning accommodation (record link)
    pub accommodation: RecordId,
    pub name: String,
    pub capacity: u32,
    pub price: Decimal,
    pub created_at: i64,
}

/// Create room payload (accommodation comes from the URL path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub name: String,
    pub capacity: u32,
    pub price: Decimal,
}

/// Update room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}
