//! Sale Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::SaleCategory;
use surrealdb::RecordId;

/// Sale ID type
pub type SaleId = RecordId;

/// Completed sales transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SaleId>,
    pub item_name: String,
    pub amount: Decimal,
    pub category: SaleCategory,
    #[serde(default)]
    pub reservation: Option<RecordId>,
    pub created_at: i64,
}

/// List row with the linked reservation's customer resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SaleId>,
    pub item_name: String,
    pub amount: Decimal,
    pub category: SaleCategory,
    #[serde(default)]
    pub reservation: Option<RecordId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub created_at: i64,
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub item_name: String,
    pub amount: Decimal,
    pub category: SaleCategory,
    #[serde(default)]
    pub reservation: Option<String>,
}
