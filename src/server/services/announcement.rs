//! # 公告范围查询服务
//!
//! 把日期范围加分页参数翻译为一次有界、按时间倒序的查询，
//! 并将结果行按「列名 -> 值」的动态映射物化。

use super::pagination::PageParams;
use crate::error::{Result, ServiceError};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{Database, DatabaseConnection, DbBackend, FromQueryResult, JsonValue, Statement};
use serde::Deserialize;
use tracing::{debug, warn};

/// 范围查询语句
///
/// 按公告时间倒序，辅以 id 倒序，保证同一时刻的公告跨页分页稳定。
const RANGE_QUERY_SQL: &str = "SELECT * FROM announcement \
     WHERE announcements_datetime BETWEEN ? AND ? \
     ORDER BY announcements_datetime DESC, id DESC \
     LIMIT ? OFFSET ?";

/// `GET /commonSoaQuery` 的查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct RangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
    #[serde(rename = "pageNo")]
    pub page_no: Option<i64>,
}

/// 公告库
///
/// 只保存连接URL；每次查询建立独立连接，用完即还，不跨请求复用。
#[derive(Debug, Clone)]
pub struct AnnouncementStore {
    database_url: String,
}

impl AnnouncementStore {
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// 建立一条新的数据库连接
    async fn connect(&self) -> Result<DatabaseConnection> {
        Database::connect(&self.database_url)
            .await
            .map_err(|e| ServiceError::store_unavailable("公告库连接失败", e))
    }
}

/// 公告范围查询服务
pub struct AnnouncementQueryService<'a> {
    store: &'a AnnouncementStore,
}

impl<'a> AnnouncementQueryService<'a> {
    #[must_use]
    pub const fn new(store: &'a AnnouncementStore) -> Self {
        Self { store }
    }

    /// 按日期范围分页查询公告，按公告时间倒序返回动态行映射。
    ///
    /// 校验 -> 建连 -> 查询 -> 物化 -> 释放，单趟执行，失败不重试。
    /// 连接在所有退出路径上都会释放，包括查询失败。
    pub async fn query(&self, query: &RangeQuery) -> Result<Vec<JsonValue>> {
        let page = PageParams::new(query.page_no, query.page_size)?;
        let (start, end) = validate_range(query.start_date.as_deref(), query.end_date.as_deref())?;

        debug!(
            "公告范围查询: [{start}, {end}], pageNo={}, pageSize={}",
            page.page_no, page.page_size
        );

        let db = self.store.connect().await?;
        let result = Self::fetch_rows(&db, start, end, page).await;
        if let Err(close_err) = db.close().await {
            warn!("关闭公告库连接失败: {close_err}");
        }
        result
    }

    /// 执行有界查询并把每行物化为「列名 -> 值」映射
    ///
    /// 列集合来自存储层返回的结果元数据，不绑定固定模式。
    async fn fetch_rows(
        db: &DatabaseConnection,
        start: &str,
        end: &str,
        page: PageParams,
    ) -> Result<Vec<JsonValue>> {
        let statement = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            RANGE_QUERY_SQL,
            [
                start.into(),
                end.into(),
                page.page_size.into(),
                page.offset().into(),
            ],
        );

        JsonValue::find_by_statement(statement)
            .all(db)
            .await
            .map_err(|e| ServiceError::query("公告范围查询执行失败", e))
    }
}

/// 校验日期范围参数
///
/// 校验通过后原样透传给存储层，保持文本时间戳的字典序比较语义；
/// 格式错误的日期在这里拒绝，SQLite 对畸形文本只会静默返回空集。
fn validate_range<'s>(start: Option<&'s str>, end: Option<&'s str>) -> Result<(&'s str, &'s str)> {
    let start = require_date("startDate", start)?;
    let end = require_date("endDate", end)?;

    if start > end {
        return Err(ServiceError::invalid_range(format!(
            "startDate 不能晚于 endDate: {start} > {end}"
        )));
    }

    Ok((start, end))
}

/// 接受 `YYYY-MM-DD` 与 `YYYY-MM-DD HH:MM:SS` 两种格式
fn require_date<'s>(name: &str, value: Option<&'s str>) -> Result<&'s str> {
    let Some(value) = value else {
        return Err(ServiceError::invalid_range(format!("{name} 为必填参数")));
    };

    let well_formed = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok();

    if well_formed {
        Ok(value)
    } else {
        Err(ServiceError::invalid_range(format!(
            "{name} 不是合法日期: {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    #[test]
    fn validate_range_accepts_dates_and_datetimes() {
        assert!(validate_range(Some("2024-01-01"), Some("2024-01-03")).is_ok());
        assert!(
            validate_range(Some("2024-01-01 00:00:00"), Some("2024-01-03 23:59:59")).is_ok(),
            "带时间的格式应被接受"
        );
        // 同一天构成合法区间
        assert!(validate_range(Some("2024-01-01"), Some("2024-01-01")).is_ok());
    }

    #[test]
    fn validate_range_rejects_missing_boundaries() {
        assert!(matches!(
            validate_range(None, Some("2024-01-03")),
            Err(ServiceError::InvalidRange { .. })
        ));
        assert!(matches!(
            validate_range(Some("2024-01-01"), None),
            Err(ServiceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn validate_range_rejects_malformed_dates() {
        assert!(validate_range(Some("not-a-date"), Some("2024-01-03")).is_err());
        assert!(validate_range(Some("2024-01-01"), Some("2024/01/03")).is_err());
        assert!(validate_range(Some("2024-13-01"), Some("2024-12-31")).is_err());
    }

    #[test]
    fn validate_range_rejects_inverted_range() {
        let err = validate_range(Some("2024-01-05"), Some("2024-01-01")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRange { .. }));
    }

    #[test]
    fn range_query_sql_orders_newest_first_with_stable_tiebreak() {
        assert!(RANGE_QUERY_SQL.contains("ORDER BY announcements_datetime DESC, id DESC"));
        assert!(RANGE_QUERY_SQL.contains("LIMIT ? OFFSET ?"));
    }
}
