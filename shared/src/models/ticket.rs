//! Ticket Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Leisure-activity pass (day pass, morning pass, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub created_at: i64,
}
