// ==========================================
// 菜单目录同步引擎 - 导入层
// ==========================================
// 职责: 表格文件 → 平面记录 → 分类解析/菜品归一化 → 批量落库
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// ==========================================

// 模块声明
pub mod catalog_importer_impl;
pub mod catalog_importer_trait;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use catalog_importer_impl::CatalogImporterImpl;
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use catalog_importer_trait::{CatalogImporter, DataCleaner, FieldMapper, FileParser};
