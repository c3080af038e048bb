//! Shared types for the resort back-office
//!
//! DTOs exchanged between resort-server and its clients: auth
//! request/response types, entity read models, and the enums both
//! sides agree on.

pub mod client;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use types::{ReservationStatus, ReservationType, SaleCategory, StaffRole};
