// ==========================================
// 菜单目录同步引擎 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 双语布尔标志解析
// ==========================================

use crate::importer::catalog_importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn parse_flag(&self, value: Option<&str>, truthy_words: &[String]) -> bool {
        match value {
            None => false,
            Some(v) => {
                let lowered = v.trim().to_lowercase();
                truthy_words
                    .iter()
                    .any(|word| word.trim().to_lowercase() == lowered)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::catalog_importer_trait::DataCleaner as _;

    fn truthy() -> Vec<String> {
        vec!["yes".to_string(), "نعم".to_string()]
    }

    #[test]
    fn test_clean_text_trims() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text("  Latte  "), "Latte");
    }

    #[test]
    fn test_normalize_null_empty_to_none() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("   ".to_string())), None);
        assert_eq!(
            cleaner.normalize_null(Some(" x ".to_string())),
            Some("x".to_string())
        );
        assert_eq!(cleaner.normalize_null(None), None);
    }

    #[test]
    fn test_parse_flag_case_insensitive() {
        let cleaner = DataCleaner;
        assert!(cleaner.parse_flag(Some("Yes"), &truthy()));
        assert!(cleaner.parse_flag(Some("YES"), &truthy()));
        assert!(cleaner.parse_flag(Some(" yes "), &truthy()));
        assert!(!cleaner.parse_flag(Some("No"), &truthy()));
    }

    #[test]
    fn test_parse_flag_arabic() {
        let cleaner = DataCleaner;
        assert!(cleaner.parse_flag(Some("نعم"), &truthy()));
        assert!(!cleaner.parse_flag(Some("لا"), &truthy()));
    }

    #[test]
    fn test_parse_flag_missing_is_false() {
        let cleaner = DataCleaner;
        assert!(!cleaner.parse_flag(None, &truthy()));
        assert!(!cleaner.parse_flag(Some(""), &truthy()));
        // 未识别的词一律按否处理
        assert!(!cleaner.parse_flag(Some("maybe"), &truthy()));
    }
}
