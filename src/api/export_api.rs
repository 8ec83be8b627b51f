// ==========================================
// 目录导出API
// ==========================================
// 职责: 封装目录导出相关功能,组装导出器并翻译结果消息
// ==========================================

use crate::api::error::ApiError;
use crate::config::ConfigManager;
use crate::exporter::error::ExportError;
use crate::exporter::{CatalogExporter, CsvSheetWriter};
use crate::i18n::{t, t_with_args};
use crate::repository::CatalogRepositoryImpl;
use serde::{Deserialize, Serialize};

/// 导出API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportApiResponse {
    /// 调用是否成功（无分类/写盘失败均为 false）
    pub success: bool,
    /// 本地化结果消息
    pub message: String,
    /// 产出文件路径（失败时为 None,不留半截文件）
    pub file_path: Option<String>,
    /// 导出行数
    pub rows: usize,
    /// 分类数
    pub categories: usize,
    /// 菜品数
    pub items: usize,
}

impl ExportApiResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            file_path: None,
            rows: 0,
            categories: 0,
            items: 0,
        }
    }
}

/// 导出API
pub struct ExportApi {
    db_path: String,
}

impl ExportApi {
    /// 创建新的ExportApi实例
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    /// 导出租户目录到指定目录
    ///
    /// # 参数
    /// - tenant_id: 租户 ID
    /// - dir: 输出目录
    ///
    /// # 返回
    /// - Ok(ExportApiResponse): {success, message, 统计} 结构
    /// - Err(ApiError): 基础设施错误（建库失败等）
    pub async fn export_catalog(
        &self,
        tenant_id: &str,
        dir: &str,
    ) -> Result<ExportApiResponse, ApiError> {
        let repo = CatalogRepositoryImpl::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("创建仓储失败: {}", e)))?;
        let config = ConfigManager::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("创建配置失败: {}", e)))?;

        let exporter = CatalogExporter::new(repo, config, Box::new(CsvSheetWriter));

        match exporter.export_to_dir(tenant_id, dir).await {
            Ok(report) => Ok(ExportApiResponse {
                success: true,
                message: t_with_args(
                    "export.success",
                    &[
                        ("path", &report.file_path),
                        ("rows", &report.rows.to_string()),
                    ],
                ),
                file_path: Some(report.file_path),
                rows: report.rows,
                categories: report.categories,
                items: report.items,
            }),
            Err(e) => Ok(ExportApiResponse::failure(Self::failure_message(e.as_ref()))),
        }
    }

    /// 将导出错误翻译为本地化消息
    fn failure_message(err: &(dyn std::error::Error + 'static)) -> String {
        match err.downcast_ref::<ExportError>() {
            Some(ExportError::NoCategories) => t("export.no_categories"),
            Some(ExportError::WriteFailed(reason)) => {
                t_with_args("export.write_failed", &[("reason", reason)])
            }
            _ => t_with_args("export.write_failed", &[("reason", &err.to_string())]),
        }
    }
}
