// ==========================================
// 菜单目录同步引擎 - 目录导出器实现
// ==========================================
// 职责: 整合导出流程,从数据库到表格文件
// 流程: 查询分类 → 查询菜品 → 行投影 → 写盘
// ==========================================

use crate::config::ImportConfigReader;
use crate::engine::row_projector;
use crate::exporter::error::ExportError;
use crate::exporter::sheet_writer::SheetWriter;
use crate::repository::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// 导出结果报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub file_path: String,
    pub rows: usize,
    pub categories: usize,
    pub items: usize,
}

// ==========================================
// CatalogExporter - 目录导出器
// ==========================================
pub struct CatalogExporter<R, C>
where
    R: CatalogRepository,
    C: ImportConfigReader,
{
    // 数据访问层
    repo: R,

    // 配置读取器
    config: C,

    // 表格写入器
    sheet_writer: Box<dyn SheetWriter>,
}

impl<R, C> CatalogExporter<R, C>
where
    R: CatalogRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    pub fn new(repo: R, config: C, sheet_writer: Box<dyn SheetWriter>) -> Self {
        Self {
            repo,
            config,
            sheet_writer,
        }
    }

    /// 导出租户目录到指定目录
    ///
    /// # 参数
    /// - tenant_id: 租户 ID（餐厅）
    /// - dir: 输出目录（需已存在）
    ///
    /// # 返回
    /// - Ok(ExportReport): 文件路径与行数统计
    /// - Err: 无分类、查询失败、写盘失败
    ///
    /// # 说明
    /// - 租户没有任何分类时不产出文件
    /// - 文件名: <prefix>-<YYYY-MM-DD>.csv
    #[instrument(skip(self, dir), fields(tenant_id = %tenant_id))]
    pub async fn export_to_dir<P: AsRef<Path>>(
        &self,
        tenant_id: &str,
        dir: P,
    ) -> Result<ExportReport, Box<dyn Error>> {
        info!("开始导出目录数据");

        // === 步骤 1: 查询分类 ===
        debug!("步骤 1: 查询分类");
        let categories = self
            .repo
            .list_categories(tenant_id)
            .await
            .map_err(|e| ExportError::DatabaseQueryError(format!("分类查询失败: {}", e)))?;

        if categories.is_empty() {
            error!("租户没有任何分类,未生成导出文件");
            return Err(Box::new(ExportError::NoCategories));
        }

        // === 步骤 2: 查询菜品 ===
        debug!("步骤 2: 查询菜品");
        let category_ids: Vec<String> = categories.iter().map(|c| c.id.clone()).collect();
        let items = self
            .repo
            .list_items_by_categories(&category_ids)
            .await
            .map_err(|e| ExportError::DatabaseQueryError(format!("菜品查询失败: {}", e)))?;
        info!(
            categories = categories.len(),
            items = items.len(),
            "目录数据查询完成"
        );

        // === 步骤 3: 行投影 ===
        debug!("步骤 3: 行投影");
        let records = row_projector::project(&categories, &items);

        // === 步骤 4: 写盘 ===
        debug!("步骤 4: 写盘");
        let prefix = self
            .config
            .get_export_file_prefix()
            .await
            .map_err(|e| ExportError::ConfigReadError(e.to_string()))?;
        let date = chrono::Local::now().format("%Y-%m-%d");
        let file_path = dir.as_ref().join(format!("{}-{}.csv", prefix, date));

        self.sheet_writer
            .write_records(&file_path, &records)
            .map_err(|e| {
                error!(error = %e, "导出文件写入失败");
                Box::new(ExportError::WriteFailed(e.to_string())) as Box<dyn Error>
            })?;

        let report = ExportReport {
            file_path: file_path.display().to_string(),
            rows: records.len(),
            categories: categories.len(),
            items: items.len(),
        };

        info!(
            file = %report.file_path,
            rows = report.rows,
            "目录数据导出完成"
        );

        Ok(report)
    }
}
