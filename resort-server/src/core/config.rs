use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::JwtConfig;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/resort/server | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | TIMEZONE | Asia/Seoul | 营业时区 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADMIN_EMAIL | admin@local | 默认管理员邮箱 |
/// | ADMIN_PASSWORD | (random) | 默认管理员密码 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/resort HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 营业时区 (仪表盘日期窗口计算)
    pub timezone: Tz,
    /// 默认管理员邮箱 (空库引导)
    pub admin_email: String,
    /// 默认管理员密码，未设置时生成随机密码并打印到日志
    pub admin_password: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!("Invalid TIMEZONE '{}', falling back to Asia/Seoul", tz);
                    None
                }
            })
            .unwrap_or(chrono_tz::Asia::Seoul);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/resort/server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone,
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@local".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录: work_dir/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录: work_dir/logs
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
