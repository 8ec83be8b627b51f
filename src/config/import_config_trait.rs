// ==========================================
// 菜单目录同步引擎 - 导入配置读取 Trait
// ==========================================
// 职责: 定义同步管道所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入/导出管道所需的配置读取接口
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    // ===== 规格缺省 =====

    /// 获取规格标签缺省值（整行无标签时的"常规份"标签）
    ///
    /// # 默认值
    /// - "Regular"
    async fn get_default_size_label(&self) -> Result<String, Box<dyn Error>>;

    // ===== 分类缺省 =====

    /// 获取分类缺省 emoji（导入新建分类且 emoji 列为空时使用）
    ///
    /// # 默认值
    /// - "🍽️"
    async fn get_default_category_emoji(&self) -> Result<String, Box<dyn Error>>;

    // ===== 布尔解析 =====

    /// 获取判定为"真"的词表（大小写不敏感比较）
    ///
    /// # 默认值
    /// - ["yes", "نعم"]
    ///
    /// # 用途
    /// - popular/spicy 列的双语布尔解析;词表之外的任何值均为 false
    async fn get_truthy_flag_words(&self) -> Result<Vec<String>, Box<dyn Error>>;

    // ===== 导出文件 =====

    /// 获取导出文件名前缀（完整文件名为 <prefix>-<YYYY-MM-DD>.csv）
    ///
    /// # 默认值
    /// - "catalog-export"
    async fn get_export_file_prefix(&self) -> Result<String, Box<dyn Error>>;
}
