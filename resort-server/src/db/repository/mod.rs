//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables using Graph DB patterns.

// Catalog
pub mod accommodation;
pub mod room;
pub mod ticket;

// Bookings & Sales
pub mod reservation;
pub mod sale;

// Auth
pub mod staff;

// Re-exports
pub use accommodation::AccommodationRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
pub use sale::SaleRepository;
pub use staff::StaffRepository;
pub use ticket::TicketRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "ticket:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("ticket", "abc");
//   - 获取表名: id.table()
//   - 获取纯ID: id.key().to_string()
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Parse a client-supplied ID into a [`RecordId`] for `table`
///
/// 接受 "table:key" 全称或裸 key；表名不匹配视为非法 ID。
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let rid: RecordId = if id.contains(':') {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?
    } else {
        RecordId::from_table_key(table, id)
    };
    if rid.table() != table {
        return Err(RepoError::Validation(format!(
            "Invalid {} ID: {}",
            table, id
        )));
    }
    Ok(rid)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_accepts_full_and_bare() {
        let full = parse_record_id("ticket", "ticket:abc123").unwrap();
        assert_eq!(full.table(), "ticket");
        let bare = parse_record_id("ticket", "abc123").unwrap();
        assert_eq!(bare.table(), "ticket");
    }

    #[test]
    fn test_parse_record_id_rejects_wrong_table() {
        assert!(parse_record_id("ticket", "room:abc123").is_err());
    }
}
