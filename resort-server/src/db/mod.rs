//! Database Module
//!
//! 嵌入式 SurrealDB (RocksDB 引擎) 连接与 schema 管理

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// 启动时幂等应用的表结构与索引
///
/// 表为 SCHEMALESS，约束在 repository 层执行；唯一索引在数据库层兜底。
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS accommodation SCHEMALESS;
DEFINE INDEX IF NOT EXISTS accommodation_name ON accommodation FIELDS name UNIQUE;

DEFINE TABLE IF NOT EXISTS room SCHEMALESS;
DEFINE INDEX IF NOT EXISTS room_owner ON room FIELDS accommodation;

DEFINE TABLE IF NOT EXISTS ticket SCHEMALESS;
DEFINE INDEX IF NOT EXISTS ticket_name ON ticket FIELDS name UNIQUE;

DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS;
DEFINE INDEX IF NOT EXISTS reservation_date ON reservation FIELDS date;

DEFINE TABLE IF NOT EXISTS sale SCHEMALESS;
DEFINE INDEX IF NOT EXISTS sale_created_at ON sale FIELDS created_at;

DEFINE TABLE IF NOT EXISTS staff SCHEMALESS;
DEFINE INDEX IF NOT EXISTS staff_email ON staff FIELDS email UNIQUE;
"#;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `db_dir` and apply the schema
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("resort")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database ready at {}", db_dir.display());

        Ok(Self { db })
    }
}
