//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (shared::models)

use crate::db::models as db;
use shared::models as api;
use surrealdb::RecordId;

// ============ Helper ============

pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

// ============ Accommodation ============

impl From<db::Accommodation> for api::Accommodation {
    fn from(a: db::Accommodation) -> Self {
        Self {
            id: option_record_id_to_string(&a.id),
            name: a.name,
            contact: a.contact,
            details: a.details,
            created_at: a.created_at,
        }
    }
}

// ============ Room ============

impl From<db::Room> for api::Room {
    fn from(r: db::Room) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            accommodation: record_id_to_string(&r.accommodation),
            name: r.name,
            capacity: r.capacity,
            price: r.price,
            created_at: r.created_at,
        }
    }
}

// ============ Ticket ============

impl From<db::Ticket> for api::Ticket {
    fn from(t: db::Ticket) -> Self {
        Self {
            id: option_record_id_to_string(&t.id),
            name: t.name,
            price: t.price,
            created_at: t.created_at,
        }
    }
}

// ============ Reservation ============

impl From<db::ReservationRow> for api::Reservation {
    fn from(r: db::ReservationRow) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            reservation_type: r.reservation_type,
            customer_name: r.customer_name,
            phone: r.phone,
            date: r.date,
            headcount: r.headcount,
            accommodation: option_record_id_to_string(&r.accommodation),
            accommodation_name: r.accommodation_name,
            ticket: option_record_id_to_string(&r.ticket),
            ticket_name: r.ticket_name,
            pickup_location: r.pickup_location,
            pickup_time: r.pickup_time,
            total_amount: r.total_amount,
            deposit: r.deposit,
            balance: r.balance,
            notes: r.notes,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

impl From<db::Reservation> for api::Reservation {
    fn from(r: db::Reservation) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            reservation_type: r.reservation_type,
            customer_name: r.customer_name,
            phone: r.phone,
            date: r.date,
            headcount: r.headcount,
            accommodation: option_record_id_to_string(&r.accommodation),
            accommodation_name: None,
            ticket: option_record_id_to_string(&r.ticket),
            ticket_name: None,
            pickup_location: r.pickup_location,
            pickup_time: r.pickup_time,
            total_amount: r.total_amount,
            deposit: r.deposit,
            balance: r.balance,
            notes: r.notes,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

// ============ Sale ============

impl From<db::SaleRow> for api::Sale {
    fn from(s: db::SaleRow) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            item_name: s.item_name,
            amount: s.amount,
            category: s.category,
            reservation: option_record_id_to_string(&s.reservation),
            customer_name: s.customer_name,
            created_at: s.created_at,
        }
    }
}

impl From<db::Sale> for api::Sale {
    fn from(s: db::Sale) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            item_name: s.item_name,
            amount: s.amount,
            category: s.category,
            reservation: option_record_id_to_string(&s.reservation),
            customer_name: None,
            created_at: s.created_at,
        }
    }
}

// ============ Staff ============

impl From<db::Staff> for api::StaffAccount {
    fn from(s: db::Staff) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            email: s.email,
            name: s.name,
            phone: s.phone,
            role: s.role,
            is_active: s.is_active,
            created_at: s.created_at,
        }
    }
}
