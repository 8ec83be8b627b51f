// ==========================================
// 菜单目录同步引擎 - 领域层
// ==========================================
// 职责: 定义实体与传输类型,不包含业务规则
// ==========================================

pub mod catalog;
pub mod types;

// 重导出核心实体
pub use catalog::{
    Category, FlatRecord, ImportBatch, ImportOutcome, ImportSummary, Item, NewCategory, NewItem,
    RawCatalogRecord, RowError,
};
pub use types::SkipClass;
