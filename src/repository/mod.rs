// ==========================================
// 菜单目录同步引擎 - 数据仓储层（后端网关）
// ==========================================
// 红线: Repository 不含业务逻辑,只做数据 CRUD
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod catalog_repo;
pub mod catalog_repo_impl;
pub mod error;

// 重导出核心仓储
pub use catalog_repo::CatalogRepository;
pub use catalog_repo_impl::CatalogRepositoryImpl;
pub use error::{RepositoryError, RepositoryResult};
