// ==========================================
// 菜单目录同步引擎 - 字段映射器实现
// ==========================================
// 职责: 表头列名 → 标准字段映射（含别名兼容）
// 类型转换延后到归一化阶段,映射本身不报错
// ==========================================

use crate::domain::catalog::RawCatalogRecord;
use crate::importer::catalog_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

/// 标准表头列名
///
/// 导出写盘与导入识别共用同一组列名,保证导出文件
/// 不加修改即可重新导入。
pub mod headers {
    pub const CATEGORY_NAME: &str = "Category Name";
    pub const CATEGORY_NAME_EN: &str = "Category Name (EN)";
    pub const CATEGORY_EMOJI: &str = "Emoji";
    pub const ITEM_NAME: &str = "Item Name";
    pub const ITEM_NAME_EN: &str = "Item Name (EN)";
    pub const DESCRIPTION: &str = "Description";
    pub const DESCRIPTION_EN: &str = "Description (EN)";
    pub const SIZES: &str = "Sizes";
    pub const PRICES: &str = "Prices";
    pub const POPULAR: &str = "Popular";
    pub const SPICY: &str = "Spicy";

    /// 导出时的列顺序
    pub const EXPORT_ORDER: [&str; 11] = [
        CATEGORY_NAME,
        CATEGORY_NAME_EN,
        CATEGORY_EMOJI,
        ITEM_NAME,
        ITEM_NAME_EN,
        DESCRIPTION,
        DESCRIPTION_EN,
        SIZES,
        PRICES,
        POPULAR,
        SPICY,
    ];
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_record(
        &self,
        row: HashMap<String, String>,
        row_number: usize,
    ) -> RawCatalogRecord {
        RawCatalogRecord {
            // 分类信息
            category_name_primary: self.get_string(&row, headers::CATEGORY_NAME),
            category_name_secondary: self.get_string(&row, headers::CATEGORY_NAME_EN),
            category_emoji: self.get_string(&row, headers::CATEGORY_EMOJI),

            // 菜品信息
            item_title_primary: self.get_string(&row, headers::ITEM_NAME),
            item_title_secondary: self.get_string(&row, headers::ITEM_NAME_EN),
            item_desc_primary: self.get_string(&row, headers::DESCRIPTION),
            item_desc_secondary: self.get_string(&row, headers::DESCRIPTION_EN),

            // 规格维度（原文,解码在归一化阶段）
            sizes_text: self.get_string(&row, headers::SIZES),
            prices_text: self.get_string(&row, headers::PRICES),

            // 标记列
            popular_text: self.get_string(&row, headers::POPULAR),
            spicy_text: self.get_string(&row, headers::SPICY),

            // 元信息
            row_number,
        }
    }
}

impl FieldMapper {
    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 定义列名别名映射（阿拉伯语表头兼容）
        let aliases: Vec<&str> = match key {
            headers::CATEGORY_NAME => vec![headers::CATEGORY_NAME, "Category", "اسم التصنيف"],
            headers::CATEGORY_NAME_EN => {
                vec![headers::CATEGORY_NAME_EN, "Category EN", "اسم التصنيف بالانجليزية"]
            }
            headers::CATEGORY_EMOJI => vec![headers::CATEGORY_EMOJI, "الرمز"],
            headers::ITEM_NAME => vec![headers::ITEM_NAME, "Item", "اسم الصنف"],
            headers::ITEM_NAME_EN => {
                vec![headers::ITEM_NAME_EN, "Item EN", "اسم الصنف بالانجليزية"]
            }
            headers::DESCRIPTION => vec![headers::DESCRIPTION, "الوصف"],
            headers::DESCRIPTION_EN => vec![headers::DESCRIPTION_EN, "الوصف بالانجليزية"],
            headers::SIZES => vec![headers::SIZES, "الأحجام"],
            headers::PRICES => vec![headers::PRICES, "الأسعار"],
            headers::POPULAR => vec![headers::POPULAR, "مميز"],
            headers::SPICY => vec![headers::SPICY, "حار"],
            _ => vec![key],
        };

        // 尝试所有可能的列名
        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mapper_basic() {
        let mut row = HashMap::new();
        row.insert("Category Name".to_string(), "Beverages".to_string());
        row.insert("Item Name".to_string(), "Latte".to_string());
        row.insert("Prices".to_string(), "12.5, 15".to_string());

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_record(row, 1);

        assert_eq!(record.category_name_primary, Some("Beverages".to_string()));
        assert_eq!(record.item_title_primary, Some("Latte".to_string()));
        assert_eq!(record.prices_text, Some("12.5, 15".to_string()));
        assert_eq!(record.row_number, 1);
    }

    #[test]
    fn test_field_mapper_trim_whitespace() {
        let mut row = HashMap::new();
        row.insert("Category Name".to_string(), "  Beverages  ".to_string());

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_record(row, 1);

        assert_eq!(record.category_name_primary, Some("Beverages".to_string()));
    }

    #[test]
    fn test_field_mapper_empty_as_none() {
        let mut row = HashMap::new();
        row.insert("Category Name".to_string(), "Beverages".to_string());
        row.insert("Description".to_string(), "".to_string());

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_record(row, 1);

        assert_eq!(record.category_name_primary, Some("Beverages".to_string()));
        assert_eq!(record.item_desc_primary, None);
    }

    #[test]
    fn test_field_mapper_arabic_aliases() {
        let mut row = HashMap::new();
        row.insert("اسم التصنيف".to_string(), "مشروبات".to_string());
        row.insert("اسم الصنف".to_string(), "قهوة".to_string());
        row.insert("الأسعار".to_string(), "10".to_string());

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_record(row, 3);

        assert_eq!(record.category_name_primary, Some("مشروبات".to_string()));
        assert_eq!(record.item_title_primary, Some("قهوة".to_string()));
        assert_eq!(record.prices_text, Some("10".to_string()));
    }

    #[test]
    fn test_field_mapper_canonical_wins_over_alias() {
        let mut row = HashMap::new();
        row.insert("Category Name".to_string(), "Beverages".to_string());
        row.insert("Category".to_string(), "Other".to_string());

        let mapper = FieldMapper;
        let record = mapper.map_to_raw_record(row, 1);

        assert_eq!(record.category_name_primary, Some("Beverages".to_string()));
    }
}
