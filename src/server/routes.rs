//! # 路由配置

use crate::server::AppState;
use axum::Router;
use axum::routing::get;

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 公告范围查询路由
        .route(
            "/commonSoaQuery",
            get(crate::server::handlers::announcements::common_soa_query),
        )
        // 存活探针
        .route("/ping", get(crate::server::handlers::system::ping_handler))
        .with_state(state)
}
