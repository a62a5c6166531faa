//! # API 响应结构
//!
//! 定义固定的 JSON 结果信封 `{"status", "msg", "data"}`，
//! 成功时 `status` 为 0，失败时为非零业务码并给出描述性 `msg`。

use crate::error::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// 结果信封
#[derive(Debug, Serialize)]
pub struct QueryEnvelope {
    pub status: i64,
    pub msg: String,
    pub data: Option<EnvelopeData>,
}

/// 信封内的数据体
#[derive(Debug, Serialize)]
pub struct EnvelopeData {
    pub results: Vec<Value>,
}

/// API响应枚举
///
/// 统一所有API出口，方便转换为 `axum::response::Response`
#[derive(Debug)]
pub enum ApiResponse {
    Results(Vec<Value>),
    AppError(ServiceError),
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Results(results) => (
                StatusCode::OK,
                Json(QueryEnvelope {
                    status: 0,
                    msg: "ok".to_string(),
                    data: Some(EnvelopeData { results }),
                }),
            )
                .into_response(),
            Self::AppError(error) => {
                // 将ServiceError转换为相应的HTTP状态码和业务码
                let (http_status, status) = match &error {
                    ServiceError::InvalidPagination { .. } => (StatusCode::BAD_REQUEST, 4001),
                    ServiceError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, 4002),
                    ServiceError::StoreUnavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, 5003),
                    ServiceError::Query { .. } => (StatusCode::INTERNAL_SERVER_ERROR, 5001),
                    ServiceError::Config { .. } | ServiceError::Io { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, 5000)
                    }
                };

                (
                    http_status,
                    Json(QueryEnvelope {
                        status,
                        msg: error.to_string(),
                        data: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// 便捷函数：查询成功响应
pub fn results(rows: Vec<Value>) -> Response {
    ApiResponse::Results(rows).into_response()
}

/// 便捷函数：应用错误响应
pub fn app_error(error: ServiceError) -> Response {
    ApiResponse::AppError(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_fixed_shape() {
        let envelope = QueryEnvelope {
            status: 0,
            msg: "ok".to_string(),
            data: Some(EnvelopeData {
                results: vec![serde_json::json!({"id": 1})],
            }),
        };

        let json = serde_json::to_value(&envelope).expect("序列化失败");
        assert_eq!(json["status"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"]["results"][0]["id"], 1);
    }

    #[test]
    fn error_envelope_serializes_null_data() {
        let envelope = QueryEnvelope {
            status: 4001,
            msg: "无效的分页参数".to_string(),
            data: None,
        };

        let json = serde_json::to_value(&envelope).expect("序列化失败");
        assert_eq!(json["status"], 4001);
        assert!(json["data"].is_null());
    }
}
