//! # 配置管理模块
//!
//! 处理应用配置加载和验证

mod app_config;
mod database;

pub use app_config::AppConfig;
pub use database::DatabaseConfig;

use std::env;
use std::path::Path;

/// 加载配置文件
///
/// 配置文件路径由 `RUST_ENV` 决定：`config/config.{env}.toml`，默认 `dev`。
pub fn load_config() -> crate::error::Result<AppConfig> {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config_file = format!("config/config.{env}.toml");

    if !Path::new(&config_file).exists() {
        return Err(crate::error::ServiceError::config(format!(
            "配置文件不存在: {config_file}"
        )));
    }

    let config_content = std::fs::read_to_string(&config_file).map_err(|e| {
        crate::error::ServiceError::config_with_source(
            format!("读取配置文件失败: {config_file}"),
            e,
        )
    })?;

    let config: AppConfig = toml::from_str(&config_content)?;

    validate_config(&config)?;

    Ok(config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> crate::error::Result<()> {
    if config.server.port == 0 {
        return Err(crate::error::ServiceError::config(format!(
            "无效的服务器端口: {}",
            config.server.port
        )));
    }

    if config.database.url.is_empty() {
        return Err(crate::error::ServiceError::config("数据库URL不能为空"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;

    #[test]
    fn validate_config_rejects_zero_port() {
        let config = AppConfig {
            server: ServerConfig {
                port: 0,
                ..ServerConfig::default()
            },
            database: DatabaseConfig::default(),
        };
        assert!(validate_config(&config).is_err(), "端口为 0 应被拒绝");
    }

    #[test]
    fn validate_config_rejects_empty_database_url() {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: String::new(),
            },
        };
        assert!(validate_config(&config).is_err(), "空数据库URL应被拒绝");
    }

    #[test]
    fn validate_config_accepts_defaults() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }
}
