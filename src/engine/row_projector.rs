// ==========================================
// 菜单目录同步引擎 - 导出行投影
// ==========================================
// 职责: 将一个租户的分类+菜品快照展开为平面记录
// 约束: 输出顺序严格镜像输入顺序（不重排）,
//       同一快照重复投影必须产出完全相同的记录序列
// ==========================================

use crate::domain::{Category, FlatRecord, Item};
use crate::engine::variant_codec;

/// 布尔字段的表格字面量（语言中立,保证重导入对称）
pub const FLAG_YES: &str = "Yes";
pub const FLAG_NO: &str = "No";

fn flag_text(value: bool) -> String {
    if value { FLAG_YES } else { FLAG_NO }.to_string()
}

/// 投影: 分类+菜品快照 → 平面记录序列
///
/// # 规则
/// - 按 categories 给定顺序遍历;无菜品的分类恰好产出一条菜品字段全空的占位记录
/// - 有菜品的分类按 items 给定顺序,每个菜品一条记录
/// - 分类展示字段（双语名称、emoji）复制到其所有菜品行上
///
/// 全函数,无失败模式
pub fn project(categories: &[Category], items: &[Item]) -> Vec<FlatRecord> {
    let mut records = Vec::new();

    for category in categories {
        let category_items: Vec<&Item> = items
            .iter()
            .filter(|item| item.category_id == category.id)
            .collect();

        if category_items.is_empty() {
            // 空分类占位行: 菜品字段全空
            records.push(FlatRecord {
                category_name_primary: category.name_primary.clone(),
                category_name_secondary: category.name_secondary.clone().unwrap_or_default(),
                category_emoji: category.emoji.clone().unwrap_or_default(),
                ..FlatRecord::default()
            });
            continue;
        }

        for item in category_items {
            let (sizes_text, prices_text) =
                variant_codec::encode(&item.size_labels, &item.prices);
            records.push(FlatRecord {
                category_name_primary: category.name_primary.clone(),
                category_name_secondary: category.name_secondary.clone().unwrap_or_default(),
                category_emoji: category.emoji.clone().unwrap_or_default(),
                item_title_primary: item.title_primary.clone(),
                item_title_secondary: item.title_secondary.clone().unwrap_or_default(),
                item_desc_primary: item.desc_primary.clone().unwrap_or_default(),
                item_desc_secondary: item.desc_secondary.clone().unwrap_or_default(),
                sizes_text,
                prices_text,
                popular_text: flag_text(item.is_popular),
                spicy_text: flag_text(item.is_spicy),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            tenant_id: "t1".to_string(),
            name_primary: name.to_string(),
            name_secondary: Some(format!("{} (en)", name)),
            emoji: Some("🍕".to_string()),
        }
    }

    fn item(category_id: &str, title: &str, popular: bool) -> Item {
        Item {
            id: format!("item-{}", title),
            tenant_id: "t1".to_string(),
            category_id: category_id.to_string(),
            title_primary: title.to_string(),
            title_secondary: None,
            desc_primary: None,
            desc_secondary: None,
            size_labels: vec!["Small".to_string(), "Large".to_string()],
            prices: vec![10.0, 15.0],
            is_popular: popular,
            is_spicy: false,
            is_available: true,
        }
    }

    #[test]
    fn test_project_one_record_per_item() {
        let categories = vec![category("c1", "Drinks")];
        let items = vec![item("c1", "Cola", true), item("c1", "Tea", false)];

        let records = project(&categories, &items);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item_title_primary, "Cola");
        assert_eq!(records[1].item_title_primary, "Tea");
        // 分类展示字段复制到每一行
        assert_eq!(records[0].category_name_primary, "Drinks");
        assert_eq!(records[1].category_name_primary, "Drinks");
        assert_eq!(records[0].sizes_text, "Small,Large");
        assert_eq!(records[0].prices_text, "10,15");
    }

    #[test]
    fn test_project_empty_category_emits_placeholder() {
        let categories = vec![category("c1", "Desserts")];
        let records = project(&categories, &[]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category_name_primary, "Desserts");
        assert!(records[0].item_title_primary.is_empty());
        assert!(records[0].prices_text.is_empty());
    }

    #[test]
    fn test_project_boolean_literals() {
        let categories = vec![category("c1", "Drinks")];
        let items = vec![item("c1", "Cola", true)];
        let records = project(&categories, &items);

        assert_eq!(records[0].popular_text, "Yes");
        assert_eq!(records[0].spicy_text, "No");
    }

    #[test]
    fn test_project_order_mirrors_input() {
        let categories = vec![category("c2", "Mains"), category("c1", "Drinks")];
        let items = vec![item("c1", "Cola", false), item("c2", "Pasta", false)];

        let records = project(&categories, &items);

        // 不重排: 分类顺序按输入,同快照重复投影结果一致
        assert_eq!(records[0].item_title_primary, "Pasta");
        assert_eq!(records[1].item_title_primary, "Cola");
        assert_eq!(records, project(&categories, &items));
    }
}
