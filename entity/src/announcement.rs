//! # 公告实体定义
//!
//! 查询路径按动态行映射读取本表；本实体仅用于数据灌入与测试。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 公告实体
///
/// `announcements_datetime` 以 `YYYY-MM-DD HH:MM:SS` 文本存储，
/// 字典序与时间序一致，范围过滤与排序都依赖这一点。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "announcement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 公告标题
    pub title: String,
    /// 发布方
    pub author: Option<String>,
    /// 公告正文
    pub content: Option<String>,
    /// 公告时间（文本，按字典序比较）
    pub announcements_datetime: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
