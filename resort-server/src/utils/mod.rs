//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型和结果别名
//! - [`logger`] - 日志初始化
//! - [`time`] - 营业时区时间工具
//! - [`validation`] - 输入校验

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResult};
