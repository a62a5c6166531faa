use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        insert_demo_announcements(manager).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除演示数据
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM announcement WHERE title LIKE '演示-%'")
            .await?;
        Ok(())
    }
}

/// 插入演示公告数据，便于前端在空库时也能看到表格
async fn insert_demo_announcements(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let sql_statements = vec![
        "INSERT INTO announcement (title, author, content, announcements_datetime) VALUES ('演示-2025年半年度报告', '示例股份', '公司2025年半年度经营情况摘要。', '2025-07-24 09:30:00')",
        "INSERT INTO announcement (title, author, content, announcements_datetime) VALUES ('演示-股东大会决议公告', '示例股份', '2025年第二次临时股东大会决议情况。', '2025-07-23 16:45:00')",
        "INSERT INTO announcement (title, author, content, announcements_datetime) VALUES ('演示-重大资产重组进展', '示例控股', '重组事项尚在推进中，敬请关注后续公告。', '2025-07-22 18:20:00')",
        "INSERT INTO announcement (title, author, content, announcements_datetime) VALUES ('演示-关于股票停牌的公告', '示例控股', '因筹划重大事项，公司股票自即日起停牌。', '2025-07-21 08:50:00')",
        "INSERT INTO announcement (title, author, content, announcements_datetime) VALUES ('演示-业绩预告修正公告', '示例科技', '修正后的归母净利润区间见正文。', '2025-07-20 20:05:00')",
    ];

    let connection = manager.get_connection();
    for sql in sql_statements {
        connection.execute_unprepared(sql).await?;
    }

    Ok(())
}
