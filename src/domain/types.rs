// ==========================================
// 菜单目录同步引擎 - 领域基础类型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SkipClass - 跳过行分类
// ==========================================
// 用途: 导入时对每个未产生菜品的行做显式归类,
//       避免"占位行"与"真正残缺的行"混在一起被静默丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipClass {
    /// 导出占位行: 分类名存在但菜品标题为空（空分类的导出产物,预期被跳过）
    Placeholder,
    /// 缺失必填字段: 有菜品标题但没有分类名,行无法归属任何分类
    MissingRequiredField,
    /// 规格解码缺省补全: 行被导入,但价格/尺寸有缺损被默认值补齐
    CoercionDefaulted,
}

impl SkipClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipClass::Placeholder => "PLACEHOLDER",
            SkipClass::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            SkipClass::CoercionDefaulted => "COERCION_DEFAULTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_class_as_str() {
        assert_eq!(SkipClass::Placeholder.as_str(), "PLACEHOLDER");
        assert_eq!(
            SkipClass::MissingRequiredField.as_str(),
            "MISSING_REQUIRED_FIELD"
        );
        assert_eq!(SkipClass::CoercionDefaulted.as_str(), "COERCION_DEFAULTED");
    }
}
