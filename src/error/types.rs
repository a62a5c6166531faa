//! # 错误类型定义

use thiserror::Error;

/// 应用主要错误类型
///
/// 查询路径上的失败一律不重试，直接上抛到请求边界，
/// 由 `server::response` 统一转换为结果信封。
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 配置相关错误
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 公告库连接无法建立
    #[error("公告库不可用: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 存储层拒绝或执行失败的查询
    #[error("查询执行失败: {message}")]
    Query {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 非正的分页参数
    #[error("无效的分页参数: {message}")]
    InvalidPagination { message: String },

    /// 缺失、格式错误或倒置的日期范围
    #[error("无效的日期范围: {message}")]
    InvalidRange { message: String },

    /// IO相关错误
    #[error("IO错误: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(anyhow::Error::new(source)),
        }
    }

    pub fn store_unavailable(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            source: Some(anyhow::Error::new(source)),
        }
    }

    pub fn query(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Query {
            message: message.into(),
            source: Some(anyhow::Error::new(source)),
        }
    }

    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination {
            message: message.into(),
        }
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source,
        }
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(source: toml::de::Error) -> Self {
        Self::Config {
            message: format!("配置文件解析失败: {source}"),
            source: Some(anyhow::Error::new(source)),
        }
    }
}
