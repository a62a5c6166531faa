use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcement::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Announcement::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcement::Author).string_len(100))
                    .col(ColumnDef::new(Announcement::Content).text())
                    .col(
                        // 文本时间戳，字典序即时间序，范围查询按此列过滤和排序
                        ColumnDef::new(Announcement::AnnouncementsDatetime)
                            .string_len(19)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcement_datetime")
                    .table(Announcement::Table)
                    .col(Announcement::AnnouncementsDatetime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Announcement {
    Table,
    Id,
    Title,
    Author,
    Content,
    AnnouncementsDatetime,
}
