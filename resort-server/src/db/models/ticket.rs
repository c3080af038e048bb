//! Ticket Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Ticket ID type
pub type TicketId = RecordId;

/// Leisure-activity pass (day pass, morning pass, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TicketId>,
    pub name: String,
    pub price: Decimal,
    pub created_at: i64,
}

/// Create ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCreate {
    pub name: String,
    pub price: Decimal,
}

/// Update ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}
