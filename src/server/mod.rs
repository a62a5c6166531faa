//! # HTTP 服务器
//!
//! Axum HTTP服务器，提供公告范围查询API
#![allow(clippy::unnecessary_wraps)]

pub mod handlers;
pub mod response;
pub mod routes;
pub mod services;

use crate::error::{Result, ServiceError};
use axum::Router;
use serde::{Deserialize, Serialize};
use services::announcement::AnnouncementStore;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// 是否启用CORS
    pub enable_cors: bool,
    /// 允许的CORS源地址
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            enable_cors: true,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// 应用状态
///
/// 只持有公告库的连接方式；连接本身按请求建立，不跨请求复用。
#[derive(Clone)]
pub struct AppState {
    store: AnnouncementStore,
}

impl AppState {
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            store: AnnouncementStore::new(database_url),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &AnnouncementStore {
        &self.store
    }
}

/// 查询服务器
pub struct QueryServer {
    /// 配置
    config: ServerConfig,
    /// 路由器
    router: Router,
}

impl QueryServer {
    /// 创建新的查询服务器
    pub fn new(config: ServerConfig, state: AppState) -> Result<Self> {
        let router = Self::create_router(state, &config);

        Ok(Self { config, router })
    }

    /// 创建路由器
    fn create_router(state: AppState, config: &ServerConfig) -> Router {
        let mut app = routes::create_routes(state);

        let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

        // 配置CORS
        if config.enable_cors {
            let mut cors_layer = CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ]);

            // 配置允许的源
            if config.cors_origins.contains(&"*".to_string()) {
                cors_layer = cors_layer.allow_origin(Any);
            } else {
                let origins = config
                    .cors_origins
                    .iter()
                    .map(|origin| origin.parse::<axum::http::HeaderValue>())
                    .collect::<std::result::Result<Vec<_>, axum::http::header::InvalidHeaderValue>>(
                    );

                match origins {
                    Ok(origins) => {
                        cors_layer = cors_layer.allow_origin(origins);
                    }
                    Err(e) => {
                        warn!("无效的CORS源配置: {e}, 回退为允许所有源");
                        cors_layer = cors_layer.allow_origin(Any);
                    }
                }
            }

            app = app.layer(service_builder.layer(cors_layer));
        } else {
            app = app.layer(service_builder);
        }

        app
    }

    /// 启动服务器
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address.clone();
        let ip = bind_address
            .parse::<std::net::IpAddr>()
            .map_err(|e| ServiceError::config(format!("无效的监听地址 '{bind_address}': {e}")))?;
        let addr = SocketAddr::new(ip, self.config.port);

        info!("正在启动公告查询服务器: {addr}");

        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, self.router).await?;

        Ok(())
    }

    /// 获取路由器（供集成测试直接调用）
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
