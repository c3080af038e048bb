//! Sale Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::SaleCategory;

/// Revenue line item
///
/// `customer_name` is joined from the linked reservation; `None` means a
/// walk-in sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Option<String>,
    pub item_name: String,
    pub amount: Decimal,
    pub category: SaleCategory,
    pub reservation: Option<String>,
    pub customer_name: Option<String>,
    pub created_at: i64,
}
