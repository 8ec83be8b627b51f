// ==========================================
// 菜单目录同步引擎 - 导出层
// ==========================================
// 职责: 关系型目录 → 平面表格文件
// 产物: 日期命名的 CSV 文件,一次写全（不留半截文件）
// ==========================================

pub mod catalog_exporter;
pub mod error;
pub mod sheet_writer;

// 重导出核心类型
pub use catalog_exporter::{CatalogExporter, ExportReport};
pub use error::{ExportError, ExportResult};
pub use sheet_writer::{CsvSheetWriter, SheetWriter};
