//! # 服务层
//!
//! 将查询逻辑集中在服务层，便于复用与测试。

pub mod announcement;
pub mod pagination;

pub use pagination::PageParams;
