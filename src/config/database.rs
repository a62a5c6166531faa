//! # 数据库配置

use serde::{Deserialize, Serialize};

/// 数据库配置
///
/// 查询路径按请求建连，这里只需要连接URL，不维护连接池参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/announce.db".to_string(),
        }
    }
}
