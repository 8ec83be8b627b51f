// ==========================================
// 菜单目录同步引擎 - 目录仓储 Trait（后端网关接口）
// ==========================================
// 职责: 定义同步引擎消费的目录数据访问接口（不包含实现）
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

use crate::domain::{Category, ImportBatch, Item, NewCategory, NewItem};
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// CatalogRepository Trait
// ==========================================
// 用途: 导出/导入引擎访问目录数据的唯一入口
// 实现者: CatalogRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ===== 读取（导出与 Pass 1 去重用）=====

    /// 列出租户的全部分类
    ///
    /// # 返回
    /// - Ok(Vec<Category>): 按后端稳定顺序返回（导出行序镜像此顺序）
    async fn list_categories(&self, tenant_id: &str) -> Result<Vec<Category>, Box<dyn Error>>;

    /// 按分类 ID 集合列出菜品
    ///
    /// # 参数
    /// - category_ids: 分类 ID 集合
    ///
    /// # 返回
    /// - Ok(Vec<Item>): 按后端稳定顺序返回
    async fn list_items_by_categories(
        &self,
        category_ids: &[String],
    ) -> Result<Vec<Item>, Box<dyn Error>>;

    // ===== 写入 =====

    /// 创建分类,ID 由后端分配
    ///
    /// # 返回
    /// - Ok(Category): 含新分配 ID 的完整分类
    /// - Err: 后端拒绝（如唯一约束冲突）
    async fn create_category(&self, category: NewCategory) -> Result<Category, Box<dyn Error>>;

    /// 批量插入菜品（单事务,全成或全败）
    ///
    /// # 说明
    /// 整批一次提交以约束往返次数;后端拒绝时整批失败,
    /// 调用方必须把"插入失败"当作菜品维度的 all-or-nothing 处理
    ///
    /// # 返回
    /// - Ok(usize): 成功插入的菜品数
    /// - Err: 数据库错误（整个事务回滚）
    async fn insert_items(&self, items: Vec<NewItem>) -> Result<usize, Box<dyn Error>>;

    // ===== 批次流水 =====

    /// 插入导入批次记录
    async fn insert_batch(&self, batch: ImportBatch) -> Result<(), Box<dyn Error>>;

    /// 查询最近的导入批次
    ///
    /// # 参数
    /// - limit: 返回记录数限制
    async fn recent_batches(&self, limit: usize) -> Result<Vec<ImportBatch>, Box<dyn Error>>;
}
