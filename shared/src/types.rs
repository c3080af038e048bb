//! Domain enums
//!
//! Serialized in lowercase over the API and stored as-is in the database,
//! so `Display` must stay in sync with the serde renames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation kind: overnight stay or day visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationType {
    Accommodation,
    Day,
}

impl fmt::Display for ReservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationType::Accommodation => write!(f, "accommodation"),
            ReservationType::Day => write!(f, "day"),
        }
    }
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Only booked reservations may still change status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReservationStatus::Booked)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Booked => write!(f, "booked"),
            ReservationStatus::Completed => write!(f, "completed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Sale line-item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleCategory {
    Ski,
    Room,
    Food,
    Other,
}

impl fmt::Display for SaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleCategory::Ski => write!(f, "ski"),
            SaleCategory::Room => write!(f, "room"),
            SaleCategory::Food => write!(f, "food"),
            SaleCategory::Other => write!(f, "other"),
        }
    }
}

/// Staff account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Employee,
}

impl StaffRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, StaffRole::Admin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::Admin => write!(f, "admin"),
            StaffRole::Employee => write!(f, "employee"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_rename() {
        for (value, expected) in [
            (serde_json::to_value(ReservationType::Day).unwrap(), "day"),
            (
                serde_json::to_value(ReservationStatus::Cancelled).unwrap(),
                "cancelled",
            ),
            (serde_json::to_value(SaleCategory::Ski).unwrap(), "ski"),
            (serde_json::to_value(StaffRole::Admin).unwrap(), "admin"),
        ] {
            assert_eq!(value.as_str().unwrap(), expected);
        }
        assert_eq!(ReservationType::Day.to_string(), "day");
        assert_eq!(ReservationStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(SaleCategory::Ski.to_string(), "ski");
        assert_eq!(StaffRole::Admin.to_string(), "admin");
    }

    #[test]
    fn booked_is_the_only_open_status() {
        assert!(!ReservationStatus::Booked.is_terminal());
        assert!(ReservationStatus::Completed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }
}
