use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::StaffRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务器的核心数据结构。使用 Arc 实现浅拷贝，
/// 每个请求克隆的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database) + schema
    /// 3. JWT 服务
    /// 4. 默认管理员账号 (空库引导)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_dir())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

        // 空库引导：确保至少存在一个管理员账号
        StaffRepository::new(db.clone())
            .ensure_default_admin(&config.admin_email, config.admin_password.as_deref())
            .await
            .expect("Failed to bootstrap default admin account");

        Self::new(config.clone(), db, jwt_service)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
