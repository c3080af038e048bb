//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type offered by an accommodation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Option<String>,
    /// Owning accommodation as a `accommodation:id` string
    pub accommodation: String,
    pub name: String,
    pub capacity: u32,
    /// Per-night price (KRW)
    pub price: Decimal,
    pub created_at: i64,
}
