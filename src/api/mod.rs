// ==========================================
// 菜单目录同步引擎 - API 层
// ==========================================
// 职责: 面向调用方的出入口,返回 {success, message, 统计} 结构
// 约束: 消息一律走 i18n,不把内部错误原样抛给调用方
// ==========================================

pub mod error;
pub mod export_api;
pub mod import_api;

// 重导出核心类型
pub use error::ApiError;
pub use export_api::{ExportApi, ExportApiResponse};
pub use import_api::{ImportApi, ImportApiResponse, RecentBatchesResponse};
