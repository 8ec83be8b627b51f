// ==========================================
// 菜单目录同步引擎 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 多租户餐厅菜单目录的批量导出/合并导入
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 目录数据访问（后端网关）
pub mod repository;

// 引擎层 - 纯业务规则（规格编解码 / 行投影）
pub mod engine;

// 导入层 - 表格合并导入
pub mod importer;

// 导出层 - 表格导出
pub mod exporter;

// 配置层 - 导入管道可调参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Category, FlatRecord, ImportBatch, ImportOutcome, ImportSummary, Item, NewCategory, NewItem,
    RawCatalogRecord, RowError, SkipClass,
};

// 引擎
pub use engine::{row_projector, variant_codec};

// 导入/导出
pub use exporter::CatalogExporter;
pub use importer::{CatalogImporter, CatalogImporterImpl};

// API
pub use api::{ExportApi, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "菜单目录同步引擎";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
