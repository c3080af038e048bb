//! Reservation Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ReservationStatus, ReservationType};

/// Reservation read model
///
/// `accommodation_name` / `ticket_name` are joined in by the server so
/// list views never need a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Option<String>,
    pub reservation_type: ReservationType,
    pub customer_name: String,
    pub phone: Option<String>,
    /// Calendar date (`YYYY-MM-DD`), not a timestamp
    pub date: String,
    pub headcount: u32,
    pub accommodation: Option<String>,
    pub accommodation_name: Option<String>,
    pub ticket: Option<String>,
    pub ticket_name: Option<String>,
    pub pickup_location: Option<String>,
    pub pickup_time: Option<String>,
    pub total_amount: Decimal,
    pub deposit: Decimal,
    /// Always `total_amount - deposit`, derived by the server
    pub balance: Decimal,
    pub notes: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
}
