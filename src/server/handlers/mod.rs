//! # HTTP 处理器

pub mod announcements;
pub mod system;
