// ==========================================
// 菜单目录同步引擎 - 目录领域模型
// ==========================================
// 实体: 分类(Category) / 菜品(Item) / 平面记录(FlatRecord)
// 约束: 菜品的 size_labels 与 prices 为位置配对的平行数组,
//       任何落库菜品必须满足 size_labels.len() == prices.len()
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Category - 分类主数据
// ==========================================
// 合并身份: (tenant_id, name_primary.trim())
// 名称比较区分大小写,不做变音符号/大小写归一化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,       // 分类 ID（后端创建时分配）
    pub tenant_id: String, // 租户 ID（一家餐厅）
    pub name_primary: String, // 主语言名称
    pub name_secondary: Option<String>, // 副语言名称
    pub emoji: Option<String>,          // 展示用符号
}

/// 创建分类载荷（ID 由后端分配）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub tenant_id: String,
    pub name_primary: String,
    pub name_secondary: Option<String>,
    pub emoji: Option<String>,
}

// ==========================================
// Item - 菜品主数据
// ==========================================
// 红线: category_id 必须指向同租户下已存在的分类,
//       菜品永远不会在分类未解析时创建
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub tenant_id: String,
    pub category_id: String,
    pub title_primary: String,
    pub title_secondary: Option<String>,
    pub desc_primary: Option<String>,
    pub desc_secondary: Option<String>,
    pub size_labels: Vec<String>, // 规格标签（与 prices 位置配对）
    pub prices: Vec<f64>,         // 规格价格（与 size_labels 位置配对）
    pub is_popular: bool,
    pub is_spicy: bool,
    pub is_available: bool,
}

/// 创建菜品载荷（ID 由后端分配）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub tenant_id: String,
    pub category_id: String,
    pub title_primary: String,
    pub title_secondary: Option<String>,
    pub desc_primary: Option<String>,
    pub desc_secondary: Option<String>,
    pub size_labels: Vec<String>,
    pub prices: Vec<f64>,
    pub is_popular: bool,
    pub is_spicy: bool,
    pub is_available: bool,
}

// ==========================================
// FlatRecord - 表格平面记录
// ==========================================
// 用途: 导出/导入的反规范化行,分类展示字段复制到其每个菜品行上,
//       使表格每行自描述
// 约定: 菜品字段全空的记录表示"空分类占位行"（仅导出产物,导入时跳过）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub category_name_primary: String,
    pub category_name_secondary: String,
    pub category_emoji: String,
    pub item_title_primary: String,
    pub item_title_secondary: String,
    pub item_desc_primary: String,
    pub item_desc_secondary: String,
    pub sizes_text: String,   // 逗号连接的规格标签
    pub prices_text: String,  // 逗号连接的规格价格
    pub popular_text: String, // "Yes"/"No"
    pub spicy_text: String,   // "Yes"/"No"
}

// ==========================================
// RawCatalogRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 表头映射 → 此结构）
// 生命周期: 仅在一次导入调用内
// 说明: 所有字段保持文本原样,数值/布尔转换推迟到清洗与编解码阶段,
//       缺省替换规则由各阶段声明式给出,不在此处散落
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCatalogRecord {
    pub category_name_primary: Option<String>,
    pub category_name_secondary: Option<String>,
    pub category_emoji: Option<String>,
    pub item_title_primary: Option<String>,
    pub item_title_secondary: Option<String>,
    pub item_desc_primary: Option<String>,
    pub item_desc_secondary: Option<String>,
    pub sizes_text: Option<String>,
    pub prices_text: Option<String>,
    pub popular_text: Option<String>,
    pub spicy_text: Option<String>,

    // 元信息
    pub row_number: usize, // 原始文件行号（用于行级错误定位）
}

// ==========================================
// RowError - 行级错误
// ==========================================
// 用途: Pass 1 分类创建失败等行级问题,不中断整批导入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    pub row_number: usize,
    pub category_name: Option<String>,
    pub message: String,
}

// ==========================================
// ImportSummary - 导入汇总统计
// ==========================================
// 说明: 每个被跳过的行都被归入明确的类别,
//       coercion_defaulted_rows 统计"已插入但发生过兜底转换"的行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,            // 文件中的数据行总数
    pub inserted: usize,              // 成功提交的菜品行数
    pub categories_created: usize,    // 新建分类数
    pub categories_reused: usize,     // 复用已有分类的行数
    pub placeholder_rows: usize,      // 占位行（空分类导出产物）
    pub missing_required_rows: usize, // 缺失必填字段而跳过的行
    pub coercion_defaulted_rows: usize, // 价格兜底为 0 / 规格补齐或截断的行
    pub error_rows: usize,            // 行级错误（分类创建失败等）
}

// ==========================================
// ImportBatch - 导入批次流水
// ==========================================
// 用途: 记录一次导入调用的元信息,供导入历史查询
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String, // 批次 ID（UUID）
    pub tenant_id: String,
    pub file_name: Option<String>, // 源文件名
    pub file_path: Option<String>, // 源文件路径
    pub total_rows: i32,
    pub inserted_rows: i32,
    pub categories_created: i32,
    pub placeholder_rows: i32,
    pub missing_required_rows: i32,
    pub coercion_rows: i32,
    pub error_rows: i32,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch: ImportBatch,
    pub summary: ImportSummary,
    pub errors: Vec<RowError>,
}
