//! # 公告查询处理器
//!
//! 处理 HTTP 请求，委托具体查询给 `AnnouncementQueryService`。

use crate::server::{
    AppState, response,
    services::announcement::{AnnouncementQueryService, RangeQuery},
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::warn;

/// 返回表格数据
pub async fn common_soa_query(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let service = AnnouncementQueryService::new(state.store());
    match service.query(&query).await {
        Ok(rows) => response::results(rows),
        Err(err) => {
            warn!("公告范围查询失败: {err}");
            response::app_error(err)
        }
    }
}
