//! # Entity 模块
//!
//! 包含所有 Sea-ORM 实体定义

pub mod announcement;

pub use announcement::Entity as Announcement;
