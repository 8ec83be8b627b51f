// ==========================================
// 菜单目录同步引擎 - 配置层
// ==========================================
// 职责: 导入/导出管道的可调参数
// 存储: config_kv 表 (key-value, global scope)
// ==========================================

pub mod config_manager;
pub mod import_config_trait;

// 重导出核心类型
pub use config_manager::ConfigManager;
pub use import_config_trait::ImportConfigReader;
