//! Data models
//!
//! Read models shared between resort-server and frontends (via API).
//! All IDs are `table:id` strings; timestamps are Unix millis.

pub mod accommodation;
pub mod reservation;
pub mod room;
pub mod sale;
pub mod staff;
pub mod ticket;

// Re-exports
pub use accommodation::*;
pub use reservation::*;
pub use room::*;
pub use sale::*;
pub use staff::*;
pub use ticket::*;
