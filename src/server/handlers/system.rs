//! # 系统处理器

/// 存活探针
pub async fn ping_handler() -> &'static str {
    "pong"
}
