//! Resort Server - 休闲/住宿运营商后台管理服务器
//!
//! # 架构概述
//!
//! Back-office HTTP API for a leisure/lodging operator: accommodations and
//! their room types, leisure tickets, reservations, sales line items, staff
//! accounts, and a daily/weekly/monthly dashboard.
//!
//! # 模块结构
//!
//! ```text
//! resort-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色检查
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 嵌入式 SurrealDB、模型、仓储
//! └── utils/         # 错误、日志、时间、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____                       __
   / __ \ ___   _____ ____   _____ / /_
  / /_/ // _ \ / ___// __ \ / ___// __/
 / _, _//  __/(__  )/ /_/ // /   / /_
/_/ |_| \___//____/ \____//_/    \__/
    "#
    );
}
