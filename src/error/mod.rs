//! # 统一错误处理

pub use types::ServiceError;

/// 全应用统一的 `Result` 类型
pub type Result<T> = std::result::Result<T, ServiceError>;

pub mod types;
