// ==========================================
// 菜单目录同步引擎 - 目录导入 Trait
// ==========================================
// 职责: 定义导入管道接口（不包含实现）
// ==========================================

use crate::domain::catalog::ImportOutcome;
use async_trait::async_trait;
use std::error::Error;
use std::path::Path;

// ==========================================
// CatalogImporter Trait
// ==========================================
// 用途: 目录导入主接口
// 实现者: CatalogImporterImpl
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// 从表格文件导入目录数据（.xlsx/.xls/.csv）
    ///
    /// # 参数
    /// - tenant_id: 租户 ID（餐厅）
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 导入结果（批次信息、汇总统计、行级错误）
    /// - Err: 文件读取错误、空文件、批量写入被拒等
    ///
    /// # 导入流程
    /// 1. 文件读取与解析
    /// 2. 表头映射（含别名兼容）
    /// 3. 第一遍: 分类解析（去重 + 缺失即建）
    /// 4. 第二遍: 行分类（占位/缺必填/正常）+ 规格解码 + 标志解析
    /// 5. 菜品整批一次写入（all-or-nothing）
    /// 6. 批次台账落库
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        tenant_id: &str,
        file_path: P,
    ) -> Result<ImportOutcome, Box<dyn Error>>;

    /// 从已解析的原始行导入（跳过文件读取阶段）
    ///
    /// # 参数
    /// - tenant_id: 租户 ID
    /// - rows: 原始行记录（HashMap<列名, 值>）
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 导入结果
    /// - Err: 空输入、批量写入被拒等
    async fn import_rows(
        &self,
        tenant_id: &str,
        rows: Vec<std::collections::HashMap<String, String>>,
    ) -> Result<ImportOutcome, Box<dyn Error>>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 使用 tokio 并发执行多个文件的导入
    /// - 每个文件的导入是独立的，互不影响
    /// - 如果某个文件导入失败，不影响其他文件
    async fn import_files<P: AsRef<Path> + Send + Sync>(
        &self,
        tenant_id: &str,
        file_paths: Vec<P>,
    ) -> Result<Vec<Result<ImportOutcome, String>>, Box<dyn Error>>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录（HashMap<列名, 值>）
    fn parse_to_raw_records(
        &self,
        file_path: &Path,
    ) -> Result<Vec<std::collections::HashMap<String, String>>, Box<dyn Error>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 RawCatalogRecord
    ///
    /// 所有字段按原文保留为字符串,数值/布尔解码延后到
    /// 归一化阶段,因此映射本身不会失败。
    fn map_to_raw_record(
        &self,
        row: std::collections::HashMap<String, String>,
        row_number: usize,
    ) -> crate::domain::catalog::RawCatalogRecord;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 清洗文本字段（TRIM）
    fn clean_text(&self, value: &str) -> String;

    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 解析双语布尔标志
    ///
    /// # 参数
    /// - value: 原始单元格文本
    /// - truthy_words: 判真词表（如 ["yes", "نعم"]），不区分大小写
    ///
    /// # 返回
    /// - true: 命中判真词
    /// - false: 空值或未命中
    fn parse_flag(&self, value: Option<&str>, truthy_words: &[String]) -> bool;
}
