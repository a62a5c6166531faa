//! # 公告查询服务主程序
//!
//! 初始化日志、配置与数据库，然后启动查询服务器。

use announce_api::{
    Result, ServiceError, config, database, logging,
    server::{AppState, QueryServer},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    // 加载并验证配置
    let app_config = config::load_config()?;

    // 执行数据初始化（建库、迁移）
    run_data_initialization(&app_config).await?;

    info!("服务启动");

    let state = AppState::new(app_config.database.url.clone());
    let server = QueryServer::new(app_config.server, state)?;
    server.serve().await
}

/// 数据初始化函数
///
/// 启动期建立一条检查用连接并在迁移后关闭；
/// 查询路径遵守按请求建连的约定，不保留进程级连接。
async fn run_data_initialization(app_config: &config::AppConfig) -> Result<()> {
    let db = database::init_database(&app_config.database.url)
        .await
        .map_err(|e| ServiceError::store_unavailable("数据库初始化失败", e))?;

    database::run_migrations(&db)
        .await
        .map_err(|e| ServiceError::query("数据库迁移失败", e))?;

    if let Err(close_err) = db.close().await {
        warn!("关闭初始化连接失败: {close_err}");
    }

    Ok(())
}
