//! Reservation Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{ReservationStatus, ReservationType};
use surrealdb::RecordId;

use super::serde_helpers::double_option;

/// Reservation ID type
pub type ReservationId = RecordId;

/// Reservation record (accommodation stay or day visit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReservationId>,
    pub reservation_type: ReservationType,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// 预订日期，"YYYY-MM-DD"
    pub date: String,
    pub headcount: u32,
    #[serde(default)]
    pub accommodation: Option<RecordId>,
    #[serde(default)]
    pub ticket: Option<RecordId>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    pub total_amount: Decimal,
    pub deposit: Decimal,
    /// 服务端派生：total_amount - deposit
    pub balance: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
}

/// List row with linked names resolved via graph traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReservationId>,
    pub reservation_type: ReservationType,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: String,
    pub headcount: u32,
    #[serde(default)]
    pub accommodation: Option<RecordId>,
    #[serde(default)]
    pub accommodation_name: Option<String>,
    #[serde(default)]
    pub ticket: Option<RecordId>,
    #[serde(default)]
    pub ticket_name: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    pub total_amount: Decimal,
    pub deposit: Decimal,
    pub balance: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
}

/// Create reservation payload — balance is derived on the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub reservation_type: ReservationType,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub date: String,
    #[serde(default = "default_headcount")]
    pub headcount: u32,
    #[serde(default)]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub deposit: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_headcount() -> u32 {
    1
}

/// Update reservation payload
///
/// 可清空字段使用双层 Option：字段缺省表示保持不变，显式 null 表示清空。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_type: Option<ReservationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<u32>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub accommodation: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pickup_location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pickup_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}
