// ==========================================
// 目录导入API
// ==========================================
// 职责: 封装目录导入相关功能,组装导入器并翻译结果消息
// ==========================================

use crate::api::error::ApiError;
use crate::config::ConfigManager;
use crate::domain::catalog::{ImportBatch, RowError};
use crate::i18n::{t, t_with_args};
use crate::importer::error::ImportError;
use crate::importer::{
    CatalogImporter, CatalogImporterImpl, DataCleanerImpl, FieldMapperImpl, UniversalFileParser,
};
use crate::repository::{CatalogRepository, CatalogRepositoryImpl};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 调用是否成功（空文件/批量写入被拒等均为 false）
    pub success: bool,
    /// 本地化结果消息
    pub message: String,
    /// 批次ID（导入流程未启动时为 None）
    pub batch_id: Option<String>,
    /// 文件总数据行数
    pub total_rows: usize,
    /// 新插入的菜品数量
    pub inserted: usize,
    /// 新建的分类数量
    pub categories_created: usize,
    /// 复用已有分类的数量
    pub categories_reused: usize,
    /// 占位行数（空分类导出产物,静默跳过）
    pub placeholder_rows: usize,
    /// 缺失必填字段行数
    pub missing_required_rows: usize,
    /// 规格解码缺省补全行数
    pub coercion_defaulted_rows: usize,
    /// 行级错误数
    pub error_rows: usize,
    /// 行级错误明细
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub row_errors: Vec<RowError>,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
}

impl ImportApiResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            batch_id: None,
            total_rows: 0,
            inserted: 0,
            categories_created: 0,
            categories_reused: 0,
            placeholder_rows: 0,
            missing_required_rows: 0,
            coercion_defaulted_rows: 0,
            error_rows: 0,
            row_errors: Vec::new(),
            elapsed_ms: 0,
        }
    }
}

/// 近期导入批次列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentBatchesResponse {
    pub batches: Vec<ImportBatch>,
    pub total: usize,
}

/// 导入API
pub struct ImportApi {
    db_path: String,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    /// 导入目录数据
    ///
    /// # 参数
    /// - tenant_id: 租户 ID
    /// - file_path: 文件路径（.csv/.xlsx/.xls）
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): {success, message, 统计} 结构
    /// - Err(ApiError): 基础设施错误（建库失败等）
    pub async fn import_catalog(
        &self,
        tenant_id: &str,
        file_path: &str,
    ) -> Result<ImportApiResponse, ApiError> {
        // 文件不存在直接判失败,不进入导入流程
        if !Path::new(file_path).exists() {
            return Ok(ImportApiResponse::failure(t_with_args(
                "import.file_not_found",
                &[("path", file_path)],
            )));
        }

        // 创建导入器
        let importer = self
            .create_importer()
            .map_err(|e| ApiError::ImportError(format!("创建导入器失败: {}", e)))?;

        // 执行导入
        match importer.import_from_file(tenant_id, file_path).await {
            Ok(outcome) => {
                let message = if outcome.summary.inserted > 0 {
                    t_with_args(
                        "import.success",
                        &[
                            ("inserted", &outcome.summary.inserted.to_string()),
                            ("categories", &outcome.summary.categories_created.to_string()),
                        ],
                    )
                } else {
                    t_with_args(
                        "import.nothing_inserted",
                        &[
                            ("placeholder", &outcome.summary.placeholder_rows.to_string()),
                            (
                                "missing",
                                &outcome.summary.missing_required_rows.to_string(),
                            ),
                        ],
                    )
                };

                Ok(ImportApiResponse {
                    success: true,
                    message,
                    batch_id: Some(outcome.batch.batch_id.clone()),
                    total_rows: outcome.summary.total_rows,
                    inserted: outcome.summary.inserted,
                    categories_created: outcome.summary.categories_created,
                    categories_reused: outcome.summary.categories_reused,
                    placeholder_rows: outcome.summary.placeholder_rows,
                    missing_required_rows: outcome.summary.missing_required_rows,
                    coercion_defaulted_rows: outcome.summary.coercion_defaulted_rows,
                    error_rows: outcome.summary.error_rows,
                    row_errors: outcome.errors,
                    elapsed_ms: outcome.batch.elapsed_ms,
                })
            }
            Err(e) => Ok(ImportApiResponse::failure(Self::failure_message(e.as_ref()))),
        }
    }

    /// 查询近期导入批次
    ///
    /// # 参数
    /// - limit: 返回条数上限（1-100）
    pub async fn recent_batches(&self, limit: usize) -> Result<RecentBatchesResponse, ApiError> {
        let repo = CatalogRepositoryImpl::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("创建仓储失败: {}", e)))?;

        let limit = limit.clamp(1, 100);
        let batches = repo
            .recent_batches(limit)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("查询批次失败: {}", e)))?;

        Ok(RecentBatchesResponse {
            total: batches.len(),
            batches,
        })
    }

    /// 将导入错误翻译为本地化消息
    fn failure_message(err: &(dyn std::error::Error + 'static)) -> String {
        match err.downcast_ref::<ImportError>() {
            Some(ImportError::EmptyFile) => t("import.empty_file"),
            Some(ImportError::BatchInsertFailed(reason)) => {
                t_with_args("import.insert_failed", &[("reason", reason)])
            }
            Some(ImportError::FileNotFound(path)) => {
                t_with_args("import.file_not_found", &[("path", path)])
            }
            _ => t_with_args("import.parse_failed", &[("reason", &err.to_string())]),
        }
    }

    /// 创建CatalogImporter实例
    fn create_importer(
        &self,
    ) -> Result<CatalogImporterImpl<CatalogRepositoryImpl, ConfigManager>, Box<dyn std::error::Error>>
    {
        let repo = CatalogRepositoryImpl::new(&self.db_path)?;
        let config = ConfigManager::new(&self.db_path)?;

        let file_parser = Box::new(UniversalFileParser);
        let field_mapper = Box::new(FieldMapperImpl);
        let data_cleaner = Box::new(DataCleanerImpl);

        Ok(CatalogImporterImpl::new(
            repo,
            config,
            file_parser,
            field_mapper,
            data_cleaner,
        ))
    }
}
