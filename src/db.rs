// ==========================================
// 菜单目录同步引擎 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 提供 schema 引导，CLI 与测试共用同一套建表语句
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema（幂等）
///
/// 表清单:
/// - category: 分类主数据（tenant_id + 主语言名称 作为合并去重键）
/// - item: 菜品主数据（规格数组以 JSON 文本落库，长度约束由导入层保证）
/// - config_kv: 全局配置键值对
/// - import_batch: 导入批次流水
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS category (
            category_id     TEXT PRIMARY KEY,
            tenant_id       TEXT NOT NULL,
            name_primary    TEXT NOT NULL,
            name_secondary  TEXT,
            emoji           TEXT,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(tenant_id, name_primary)
        );

        CREATE TABLE IF NOT EXISTS item (
            item_id          TEXT PRIMARY KEY,
            tenant_id        TEXT NOT NULL,
            category_id      TEXT NOT NULL REFERENCES category(category_id) ON DELETE CASCADE,
            title_primary    TEXT NOT NULL,
            title_secondary  TEXT,
            desc_primary     TEXT,
            desc_secondary   TEXT,
            size_labels_json TEXT NOT NULL,
            prices_json      TEXT NOT NULL,
            is_popular       INTEGER NOT NULL DEFAULT 0,
            is_spicy         INTEGER NOT NULL DEFAULT 0,
            is_available     INTEGER NOT NULL DEFAULT 1,
            created_at       TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_item_category ON item(category_id);
        CREATE INDEX IF NOT EXISTS idx_item_tenant ON item(tenant_id);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id   TEXT NOT NULL,
            key        TEXT NOT NULL,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );

        CREATE TABLE IF NOT EXISTS import_batch (
            batch_id              TEXT PRIMARY KEY,
            tenant_id             TEXT NOT NULL,
            file_name             TEXT,
            file_path             TEXT,
            total_rows            INTEGER NOT NULL,
            inserted_rows         INTEGER NOT NULL,
            categories_created   INTEGER NOT NULL,
            placeholder_rows      INTEGER NOT NULL,
            missing_required_rows INTEGER NOT NULL,
            coercion_rows         INTEGER NOT NULL,
            error_rows            INTEGER NOT NULL,
            imported_at           TEXT NOT NULL,
            elapsed_ms            INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        // 再跑一次不应报错
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('category','item','config_kv','import_batch')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}
