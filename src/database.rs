//! # 数据库模块
//!
//! 数据库连接和迁移管理

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use tracing::{debug, error, info};

/// 初始化数据库连接
///
/// 对于 SQLite 文件数据库，会先确保目录与文件存在。
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    info!("正在连接数据库: {database_url}");

    if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
        ensure_sqlite_file(database_url)?;
    }

    let db = Database::connect(database_url).await?;

    info!("数据库连接成功");
    Ok(db)
}

/// 确保 SQLite 数据库文件及其父目录存在
fn ensure_sqlite_file(database_url: &str) -> Result<(), DbErr> {
    let db_path = database_url
        .strip_prefix("sqlite://")
        .unwrap_or(database_url.strip_prefix("sqlite:").unwrap_or(database_url));
    let db_file_path = Path::new(db_path);

    if let Some(parent_dir) = db_file_path.parent() {
        if !parent_dir.exists() {
            debug!("创建数据库目录: {}", parent_dir.display());
            std::fs::create_dir_all(parent_dir).map_err(|e| {
                DbErr::Custom(format!("无法创建数据库目录 {}: {e}", parent_dir.display()))
            })?;
        }
    }

    if !db_file_path.exists() {
        debug!("创建数据库文件: {}", db_file_path.display());
        std::fs::File::create(db_file_path).map_err(|e| {
            DbErr::Custom(format!("无法创建数据库文件 {}: {e}", db_file_path.display()))
        })?;
    }

    Ok(())
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    use sea_orm_migration::MigratorTrait;

    info!("开始运行数据库迁移...");

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            info!("数据库迁移完成");
            Ok(())
        }
        Err(e) => {
            error!("数据库迁移失败: {e}");
            Err(e)
        }
    }
}
