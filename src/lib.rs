//! # 公告查询服务核心库
//!
//! 面向浏览器前端的公告表格数据查询服务

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Result, ServiceError};
