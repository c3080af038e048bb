//! Database models
//!
//! SurrealDB 侧实体模型。ID 使用原生 [`surrealdb::RecordId`]，API 输出
//! 在 `api::convert` 中转换为 `table:id` 字符串的共享模型。

pub mod accommodation;
pub mod reservation;
pub mod room;
pub mod sale;
pub mod serde_helpers;
pub mod staff;
pub mod ticket;

pub use accommodation::{Accommodation, AccommodationCreate, AccommodationId, AccommodationUpdate};
pub use reservation::{
    Reservation, ReservationCreate, ReservationId, ReservationRow, ReservationUpdate,
};
pub use room::{Room, RoomCreate, RoomId, RoomUpdate};
pub use sale::{Sale, SaleCreate, SaleId, SaleRow};
pub use staff::{Staff, StaffCreate, StaffId, StaffUpdate};
pub use ticket::{Ticket, TicketCreate, TicketId, TicketUpdate};
