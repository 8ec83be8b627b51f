// ==========================================
// 菜单目录同步引擎 - 目录仓储实现（rusqlite）
// ==========================================
// 职责: CatalogRepository 的 SQLite 落地
// 约束: 菜品批量插入必须在单事务内完成
// 说明: 规格平行数组以 JSON 文本列落库,读出时反序列化
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{Category, ImportBatch, Item, NewCategory, NewItem};
use crate::repository::catalog_repo::CatalogRepository;
use crate::repository::error::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// CatalogRepositoryImpl
// ==========================================
pub struct CatalogRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogRepositoryImpl {
    /// 创建新的 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建（幂等地再次应用统一 PRAGMA）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            tenant_id: row.get(1)?,
            name_primary: row.get(2)?,
            name_secondary: row.get(3)?,
            emoji: row.get(4)?,
        })
    }

    fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
        let size_labels_json: String = row.get(7)?;
        let prices_json: String = row.get(8)?;
        Ok(Item {
            id: row.get(0)?,
            tenant_id: row.get(1)?,
            category_id: row.get(2)?,
            title_primary: row.get(3)?,
            title_secondary: row.get(4)?,
            desc_primary: row.get(5)?,
            desc_secondary: row.get(6)?,
            size_labels: serde_json::from_str(&size_labels_json).unwrap_or_default(),
            prices: serde_json::from_str(&prices_json).unwrap_or_default(),
            is_popular: row.get(9)?,
            is_spicy: row.get(10)?,
            is_available: row.get(11)?,
        })
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn list_categories(&self, tenant_id: &str) -> Result<Vec<Category>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let mut stmt = conn.prepare(
            r#"
            SELECT category_id, tenant_id, name_primary, name_secondary, emoji
            FROM category
            WHERE tenant_id = ?1
            ORDER BY rowid
            "#,
        )?;

        let categories = stmt
            .query_map(params![tenant_id], Self::row_to_category)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    async fn list_items_by_categories(
        &self,
        category_ids: &[String],
    ) -> Result<Vec<Item>, Box<dyn Error>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        // IN 子句按集合大小生成占位符,仍为参数化查询
        let placeholders = (1..=category_ids.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            r#"
            SELECT item_id, tenant_id, category_id, title_primary, title_secondary,
                   desc_primary, desc_secondary, size_labels_json, prices_json,
                   is_popular, is_spicy, is_available
            FROM item
            WHERE category_id IN ({})
            ORDER BY rowid
            "#,
            placeholders
        );

        let mut stmt = conn.prepare(&sql)?;
        let items = stmt
            .query_map(rusqlite::params_from_iter(category_ids.iter()), Self::row_to_item)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let category_id = Uuid::new_v4().to_string();
        conn.execute(
            r#"
            INSERT INTO category (category_id, tenant_id, name_primary, name_secondary, emoji, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                category_id,
                category.tenant_id,
                category.name_primary,
                category.name_secondary,
                category.emoji,
                Utc::now(),
            ],
        )
        .map_err(RepositoryError::from)?;

        Ok(Category {
            id: category_id,
            tenant_id: category.tenant_id,
            name_primary: category.name_primary,
            name_secondary: category.name_secondary,
            emoji: category.emoji,
        })
    }

    async fn insert_items(&self, items: Vec<NewItem>) -> Result<usize, Box<dyn Error>> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO item (
                    item_id, tenant_id, category_id, title_primary, title_secondary,
                    desc_primary, desc_secondary, size_labels_json, prices_json,
                    is_popular, is_spicy, is_available, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                "#,
            )?;

            for item in &items {
                stmt.execute(params![
                    Uuid::new_v4().to_string(),
                    item.tenant_id,
                    item.category_id,
                    item.title_primary,
                    item.title_secondary,
                    item.desc_primary,
                    item.desc_secondary,
                    serde_json::to_string(&item.size_labels)?,
                    serde_json::to_string(&item.prices)?,
                    item.is_popular,
                    item.is_spicy,
                    item.is_available,
                    Utc::now(),
                ])?;
                count += 1;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        Ok(count)
    }

    async fn insert_batch(&self, batch: ImportBatch) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO import_batch (
                batch_id, tenant_id, file_name, file_path, total_rows, inserted_rows,
                categories_created, placeholder_rows, missing_required_rows,
                coercion_rows, error_rows, imported_at, elapsed_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                batch.batch_id,
                batch.tenant_id,
                batch.file_name,
                batch.file_path,
                batch.total_rows,
                batch.inserted_rows,
                batch.categories_created,
                batch.placeholder_rows,
                batch.missing_required_rows,
                batch.coercion_rows,
                batch.error_rows,
                batch.imported_at,
                batch.elapsed_ms,
            ],
        )
        .map_err(RepositoryError::from)?;

        Ok(())
    }

    async fn recent_batches(&self, limit: usize) -> Result<Vec<ImportBatch>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let mut stmt = conn.prepare(
            r#"
            SELECT batch_id, tenant_id, file_name, file_path, total_rows, inserted_rows,
                   categories_created, placeholder_rows, missing_required_rows,
                   coercion_rows, error_rows, imported_at, elapsed_ms
            FROM import_batch
            ORDER BY imported_at DESC
            LIMIT ?1
            "#,
        )?;

        let batches = stmt
            .query_map(params![limit as i64], |row| {
                let imported_at: DateTime<Utc> = row.get(11)?;
                Ok(ImportBatch {
                    batch_id: row.get(0)?,
                    tenant_id: row.get(1)?,
                    file_name: row.get(2)?,
                    file_path: row.get(3)?,
                    total_rows: row.get(4)?,
                    inserted_rows: row.get(5)?,
                    categories_created: row.get(6)?,
                    placeholder_rows: row.get(7)?,
                    missing_required_rows: row.get(8)?,
                    coercion_rows: row.get(9)?,
                    error_rows: row.get(10)?,
                    imported_at,
                    elapsed_ms: row.get(12)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(batches)
    }
}
