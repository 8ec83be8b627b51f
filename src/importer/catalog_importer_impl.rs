// ==========================================
// 菜单目录同步引擎 - 目录导入器实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 解析 → 映射 → 分类解析 → 行归一化 → 整批落库 → 批次台账
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::{
    ImportBatch, ImportOutcome, ImportSummary, NewCategory, NewItem, RawCatalogRecord, RowError,
    SkipClass,
};
use crate::engine::variant_codec;
use crate::importer::catalog_importer_trait::{
    CatalogImporter, DataCleaner, FieldMapper, FileParser,
};
use crate::importer::error::ImportError;
use crate::repository::CatalogRepository;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// CatalogImporterImpl - 目录导入器实现
// ==========================================
pub struct CatalogImporterImpl<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    // 数据访问层
    repo: R,

    // 配置读取器
    config: C,

    // 导入组件
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl<R, C> CatalogImporterImpl<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    /// 创建新的 CatalogImporter 实例
    ///
    /// # 参数
    /// - repo: 目录数据仓储
    /// - config: 配置读取器
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    /// - data_cleaner: 数据清洗器
    pub fn new(
        repo: R,
        config: C,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        Self {
            repo,
            config,
            file_parser,
            field_mapper,
            data_cleaner,
        }
    }
}

#[async_trait::async_trait]
impl<R, C> CatalogImporter for CatalogImporterImpl<R, C>
where
    R: CatalogRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    #[instrument(skip(self, file_path), fields(tenant_id = %tenant_id))]
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        tenant_id: &str,
        file_path: P,
    ) -> Result<ImportOutcome, Box<dyn Error>> {
        let file_path_str = file_path.as_ref().to_str().unwrap_or("unknown").to_string();
        info!(file_path = %file_path_str, "开始导入目录数据");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let raw_rows = self
            .file_parser
            .parse_to_raw_records(file_path.as_ref())
            .map_err(|e| {
                error!(error = %e, "文件解析失败");
                format!("文件解析失败: {}", e)
            })?;

        let file_name = Path::new(&file_path_str)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        self.run_import(tenant_id, raw_rows, Some(file_name), Some(file_path_str))
            .await
    }

    async fn import_rows(
        &self,
        tenant_id: &str,
        rows: Vec<HashMap<String, String>>,
    ) -> Result<ImportOutcome, Box<dyn Error>> {
        self.run_import(tenant_id, rows, None, None).await
    }

    /// 批量导入多个文件（并发执行）
    async fn import_files<P: AsRef<Path> + Send + Sync>(
        &self,
        tenant_id: &str,
        file_paths: Vec<P>,
    ) -> Result<Vec<Result<ImportOutcome, String>>, Box<dyn Error>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        // 为每个文件创建导入任务
        let import_tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().to_str().unwrap_or("unknown").to_string();
            async move {
                info!(file = %path_str, "开始导入文件");
                match self.import_from_file(tenant_id, path).await {
                    Ok(outcome) => {
                        info!(
                            file = %path_str,
                            inserted = outcome.summary.inserted,
                            "文件导入成功"
                        );
                        Ok(outcome)
                    }
                    Err(e) => {
                        error!(file = %path_str, error = %e, "文件导入失败");
                        Err(format!("文件 {} 导入失败: {}", path_str, e))
                    }
                }
            }
        });

        // 并发执行所有导入任务
        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        Ok(results)
    }
}

// 辅助方法
impl<R, C> CatalogImporterImpl<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    /// 两遍式导入主流程
    async fn run_import(
        &self,
        tenant_id: &str,
        raw_rows: Vec<HashMap<String, String>>,
        file_name: Option<String>,
        file_path: Option<String>,
    ) -> Result<ImportOutcome, Box<dyn Error>> {
        use std::time::Instant;
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let total_rows = raw_rows.len();
        if total_rows == 0 {
            error!(batch_id = %batch_id, "文件中没有任何数据行");
            return Err(Box::new(ImportError::EmptyFile));
        }
        info!(batch_id = %batch_id, total_rows = total_rows, "文件解析完成");

        // === 步骤 2: 字段映射 ===
        debug!("步骤 2: 字段映射");
        let records: Vec<RawCatalogRecord> = raw_rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_to_raw_record(row, idx + 1))
            .collect();

        // === 步骤 3: 读取导入配置 ===
        debug!("步骤 3: 读取导入配置");
        let default_size_label = self
            .config
            .get_default_size_label()
            .await
            .map_err(|e| ImportError::ConfigReadError(e.to_string()))?;
        let default_emoji = self
            .config
            .get_default_category_emoji()
            .await
            .map_err(|e| ImportError::ConfigReadError(e.to_string()))?;
        let truthy_words = self
            .config
            .get_truthy_flag_words()
            .await
            .map_err(|e| ImportError::ConfigReadError(e.to_string()))?;

        // === 步骤 4: 第一遍 - 分类解析 ===
        // 同名分类（按去空格后的主名称）在一次导入内只解析/创建一次
        debug!("步骤 4: 分类解析");
        let existing = self
            .repo
            .list_categories(tenant_id)
            .await
            .map_err(|e| ImportError::DatabaseQueryError(format!("分类查询失败: {}", e)))?;

        let mut category_ids: HashMap<String, String> = existing
            .into_iter()
            .map(|c| (c.name_primary.trim().to_string(), c.id))
            .collect();
        // 复用 = 本次导入前就存在的分类;同批内第二次出现不算复用
        let preexisting: HashSet<String> = category_ids.keys().cloned().collect();
        let mut reused_names: HashSet<String> = HashSet::new();
        let mut failed_names: HashMap<String, String> = HashMap::new();
        let mut categories_created = 0usize;

        for record in &records {
            let Some(name) = self
                .data_cleaner
                .normalize_null(record.category_name_primary.clone())
            else {
                continue;
            };

            if failed_names.contains_key(&name) {
                continue;
            }
            if category_ids.contains_key(&name) {
                if preexisting.contains(&name) {
                    reused_names.insert(name);
                }
                continue;
            }

            // 缺失即建: 副语言名称缺省回退主名称,图标缺省回退配置默认
            let new_category = NewCategory {
                tenant_id: tenant_id.to_string(),
                name_primary: name.clone(),
                name_secondary: Some(
                    self.data_cleaner
                        .normalize_null(record.category_name_secondary.clone())
                        .unwrap_or_else(|| name.clone()),
                ),
                emoji: Some(
                    self.data_cleaner
                        .normalize_null(record.category_emoji.clone())
                        .unwrap_or_else(|| default_emoji.clone()),
                ),
            };

            match self.repo.create_category(new_category).await {
                Ok(category) => {
                    debug!(category = %name, category_id = %category.id, "分类创建成功");
                    category_ids.insert(name, category.id);
                    categories_created += 1;
                }
                Err(e) => {
                    // 创建失败不中止导入,引用该分类的行记为行级错误
                    let msg = e.to_string();
                    warn!(category = %name, error = %msg, "分类创建失败");
                    failed_names.insert(name, msg);
                }
            }
        }
        info!(
            created = categories_created,
            reused = reused_names.len(),
            failed = failed_names.len(),
            "分类解析完成"
        );

        // === 步骤 5: 第二遍 - 行归一化 ===
        debug!("步骤 5: 行归一化");
        let mut payloads: Vec<NewItem> = Vec::new();
        let mut errors: Vec<RowError> = Vec::new();
        let mut placeholder_rows = 0usize;
        let mut missing_required_rows = 0usize;
        let mut coercion_defaulted_rows = 0usize;

        for record in &records {
            let name = self
                .data_cleaner
                .normalize_null(record.category_name_primary.clone());
            let title = self
                .data_cleaner
                .normalize_null(record.item_title_primary.clone());

            let (name, title) = match (name, title) {
                // 只有分类名的行是导出侧生成的占位行,静默跳过
                (Some(_), None) => {
                    debug!(
                        row = record.row_number,
                        skip = SkipClass::Placeholder.as_str(),
                        "跳过占位行"
                    );
                    placeholder_rows += 1;
                    continue;
                }
                // 分类名缺失的行无法归属,跳过并计数
                (None, _) => {
                    debug!(
                        row = record.row_number,
                        skip = SkipClass::MissingRequiredField.as_str(),
                        "跳过缺必填行"
                    );
                    missing_required_rows += 1;
                    continue;
                }
                (Some(n), Some(t)) => (n, t),
            };

            // 分类创建失败波及的行 → 行级错误
            if let Some(reason) = failed_names.get(&name) {
                errors.push(RowError {
                    row_number: record.row_number,
                    category_name: Some(name.clone()),
                    message: format!("分类创建失败: {}", reason),
                });
                continue;
            }
            let Some(category_id) = category_ids.get(&name) else {
                errors.push(RowError {
                    row_number: record.row_number,
                    category_name: Some(name.clone()),
                    message: "分类解析失败".to_string(),
                });
                continue;
            };

            // 规格解码（全函数,缺损即补）
            let decoded = variant_codec::decode(
                record.prices_text.as_deref().unwrap_or(""),
                record.sizes_text.as_deref().unwrap_or(""),
                &default_size_label,
            );
            if decoded.was_coerced() {
                debug!(
                    row = record.row_number,
                    skip = SkipClass::CoercionDefaulted.as_str(),
                    "规格解码发生缺省补全"
                );
                coercion_defaulted_rows += 1;
            }

            payloads.push(NewItem {
                tenant_id: tenant_id.to_string(),
                category_id: category_id.clone(),
                title_primary: title,
                title_secondary: self
                    .data_cleaner
                    .normalize_null(record.item_title_secondary.clone()),
                desc_primary: self
                    .data_cleaner
                    .normalize_null(record.item_desc_primary.clone()),
                desc_secondary: self
                    .data_cleaner
                    .normalize_null(record.item_desc_secondary.clone()),
                size_labels: decoded.size_labels,
                prices: decoded.prices,
                is_popular: self
                    .data_cleaner
                    .parse_flag(record.popular_text.as_deref(), &truthy_words),
                is_spicy: self
                    .data_cleaner
                    .parse_flag(record.spicy_text.as_deref(), &truthy_words),
                // 导入的菜品默认上架
                is_available: true,
            });
        }
        info!(
            payloads = payloads.len(),
            placeholder = placeholder_rows,
            missing_required = missing_required_rows,
            coerced = coercion_defaulted_rows,
            errors = errors.len(),
            "行归一化完成"
        );

        // === 步骤 6: 菜品整批一次写入 ===
        debug!("步骤 6: 批量插入菜品");
        let inserted = if payloads.is_empty() {
            0
        } else {
            self.repo.insert_items(payloads).await.map_err(|e| {
                error!(error = %e, "菜品批量写入被拒绝");
                Box::new(ImportError::BatchInsertFailed(e.to_string())) as Box<dyn Error>
            })?
        };
        info!(count = inserted, "菜品插入完成");

        let elapsed_time = start_time.elapsed();

        // === 步骤 7: 记录批次台账 ===
        let batch = ImportBatch {
            batch_id: batch_id.clone(),
            tenant_id: tenant_id.to_string(),
            file_name,
            file_path,
            total_rows: total_rows as i32,
            inserted_rows: inserted as i32,
            categories_created: categories_created as i32,
            placeholder_rows: placeholder_rows as i32,
            missing_required_rows: missing_required_rows as i32,
            coercion_rows: coercion_defaulted_rows as i32,
            error_rows: errors.len() as i32,
            imported_at: Utc::now(),
            elapsed_ms: elapsed_time.as_millis() as i64,
        };
        self.repo
            .insert_batch(batch.clone())
            .await
            .map_err(|e| ImportError::DatabaseQueryError(format!("批次台账写入失败: {}", e)))?;

        // === 步骤 8: 构造返回结果 ===
        let summary = ImportSummary {
            total_rows,
            inserted,
            categories_created,
            categories_reused: reused_names.len(),
            placeholder_rows,
            missing_required_rows,
            coercion_defaulted_rows,
            error_rows: errors.len(),
        };

        info!(
            batch_id = %batch_id,
            total = total_rows,
            inserted = inserted,
            categories_created = categories_created,
            errors = errors.len(),
            elapsed_ms = elapsed_time.as_millis(),
            "目录数据导入完成"
        );

        Ok(ImportOutcome {
            batch,
            summary,
            errors,
        })
    }
}
