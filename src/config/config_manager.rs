// ==========================================
// 菜单目录同步引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询
// 存储: config_kv 表 (key-value, scope_id='global')
// 约定: 键缺失时回落到内置默认值,不报错
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::db::open_sqlite_connection;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// 配置键全集
pub mod config_keys {
    pub const DEFAULT_SIZE_LABEL: &str = "import/default_size_label";
    pub const DEFAULT_CATEGORY_EMOJI: &str = "import/default_category_emoji";
    pub const TRUTHY_FLAG_WORDS: &str = "import/truthy_flag_words";
    pub const EXPORT_FILE_PREFIX: &str = "export/file_prefix";
}

/// 内置默认值
mod defaults {
    pub const DEFAULT_SIZE_LABEL: &str = "Regular";
    pub const DEFAULT_CATEGORY_EMOJI: &str = "🍽️";
    // 逗号分隔;对应双语 Yes（英语/阿拉伯语）
    pub const TRUTHY_FLAG_WORDS: &str = "yes,نعم";
    pub const EXPORT_FILE_PREFIX: &str = "catalog-export";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入 global scope 配置（UPSERT,供 CLI/测试调整参数）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

#[async_trait]
impl ImportConfigReader for ConfigManager {
    async fn get_default_size_label(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(config_keys::DEFAULT_SIZE_LABEL, defaults::DEFAULT_SIZE_LABEL)
    }

    async fn get_default_category_emoji(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(
            config_keys::DEFAULT_CATEGORY_EMOJI,
            defaults::DEFAULT_CATEGORY_EMOJI,
        )
    }

    async fn get_truthy_flag_words(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let raw = self.get_config_or_default(
            config_keys::TRUTHY_FLAG_WORDS,
            defaults::TRUTHY_FLAG_WORDS,
        )?;
        Ok(raw
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect())
    }

    async fn get_export_file_prefix(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(
            config_keys::EXPORT_FILE_PREFIX,
            defaults::EXPORT_FILE_PREFIX,
        )
    }
}
