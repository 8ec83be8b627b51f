// ==========================================
// 菜单目录同步引擎 - 规格编解码器
// ==========================================
// 职责: 菜品"规格标签/价格"平行数组 与 逗号连接文本列 的互转
// 约束: decode 输出恒满足 size_labels.len() == prices.len()
// 已知限制: encode 不转义标签内嵌的逗号（与现网表格约定一致,不静默修正）
// ==========================================

/// 规格标签缺省值（整表无标签时用作"常规份"）
pub const DEFAULT_SIZE_LABEL: &str = "Regular";

/// 解码结果
///
/// 附带兜底统计,供导入汇总归类"发生过兜底转换"的行
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedVariants {
    pub size_labels: Vec<String>,
    pub prices: Vec<f64>,
    /// 无法解析而兜底为 0 的价格单元数
    pub price_fallbacks: usize,
    /// 规格标签数少于价格数,发生过补齐
    pub padded: bool,
    /// 规格标签数多于价格数,发生过截断
    pub truncated: bool,
}

impl DecodedVariants {
    /// 该行是否发生过任何兜底转换
    pub fn was_coerced(&self) -> bool {
        self.price_fallbacks > 0 || self.padded || self.truncated
    }
}

/// 编码: 平行数组 → (规格文本, 价格文本)
///
/// 价格按 Rust 默认格式输出（10.0 → "10"）,保证重导入对称
pub fn encode(size_labels: &[String], prices: &[f64]) -> (String, String) {
    let sizes_text = size_labels.join(",");
    let prices_text = prices
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");
    (sizes_text, prices_text)
}

/// 解码: (价格文本, 规格文本) → 平行数组
///
/// # 规则
/// - 价格按逗号切分,每段解析为十进制数,空段/非法段兜底为 0（从不报错）
/// - 规格按逗号切分并逐段 trim;空段保位,用首个非空标签回填,
///   不会把后面的标签挪到前面的价格上;整列皆空视为无标签
/// - 标签少于价格: 重复首个非空标签（无标签时用 default_label）补齐
/// - 标签多于价格: 截断到价格数量
///
/// 纯函数且全函数: 任何输入（包括空串）都产出满足长度约束的结果
pub fn decode(prices_text: &str, sizes_text: &str, default_label: &str) -> DecodedVariants {
    let mut price_fallbacks = 0usize;
    let prices: Vec<f64> = prices_text
        .split(',')
        .map(|piece| {
            piece.trim().parse::<f64>().unwrap_or_else(|_| {
                price_fallbacks += 1;
                0.0
            })
        })
        .collect();

    let pieces: Vec<String> = sizes_text
        .split(',')
        .map(|piece| piece.trim().to_string())
        .collect();
    let fill_label = pieces
        .iter()
        .find(|piece| !piece.is_empty())
        .cloned()
        .unwrap_or_else(|| default_label.to_string());

    let mut padded = false;
    let mut size_labels: Vec<String> = if pieces.iter().all(|piece| piece.is_empty()) {
        Vec::new()
    } else {
        pieces
            .into_iter()
            .map(|piece| {
                if piece.is_empty() {
                    padded = true;
                    fill_label.clone()
                } else {
                    piece
                }
            })
            .collect()
    };

    let mut truncated = false;
    if size_labels.len() < prices.len() {
        padded = true;
        while size_labels.len() < prices.len() {
            size_labels.push(fill_label.clone());
        }
    } else if size_labels.len() > prices.len() {
        truncated = true;
        size_labels.truncate(prices.len());
    }

    DecodedVariants {
        size_labels,
        prices,
        price_fallbacks,
        padded,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_basic() {
        let (sizes, prices) = encode(&labels(&["Small", "Large"]), &[10.0, 15.5]);
        assert_eq!(sizes, "Small,Large");
        assert_eq!(prices, "10,15.5");
    }

    #[test]
    fn test_decode_paired() {
        let decoded = decode("10,15", "Small,Large", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.prices, vec![10.0, 15.0]);
        assert_eq!(decoded.size_labels, labels(&["Small", "Large"]));
        assert!(!decoded.was_coerced());
    }

    #[test]
    fn test_decode_empty_price_cell_is_zero() {
        let decoded = decode("", "Small", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.prices, vec![0.0]);
        assert_eq!(decoded.size_labels, labels(&["Small"]));
        assert_eq!(decoded.price_fallbacks, 1);
    }

    #[test]
    fn test_decode_unparsable_price_is_zero() {
        let decoded = decode("10,abc,7.5", "S,M,L", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.prices, vec![10.0, 0.0, 7.5]);
        assert_eq!(decoded.price_fallbacks, 1);
        assert!(decoded.was_coerced());
    }

    #[test]
    fn test_decode_pads_with_first_label() {
        let decoded = decode("10,15,20", "Small", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, labels(&["Small", "Small", "Small"]));
        assert!(decoded.padded);
    }

    #[test]
    fn test_decode_pads_with_default_when_no_labels() {
        let decoded = decode("20", "", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, labels(&["Regular"]));
        assert_eq!(decoded.prices, vec![20.0]);
        assert!(decoded.padded);
    }

    #[test]
    fn test_decode_truncates_extra_labels() {
        let decoded = decode("10", "Small,Large", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, labels(&["Small"]));
        assert_eq!(decoded.prices, vec![10.0]);
        assert!(decoded.truncated);
    }

    // 中间空段保位回填,后面的标签不会错位到前面的价格上
    #[test]
    fn test_decode_interior_empty_label_keeps_pairing() {
        let decoded = decode("1,2,3", "S,,L", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, labels(&["S", "S", "L"]));
        assert_eq!(decoded.prices, vec![1.0, 2.0, 3.0]);
        assert!(decoded.padded);
        assert!(decoded.was_coerced());
    }

    #[test]
    fn test_decode_trims_labels() {
        let decoded = decode("1,2", " Small , Large ", DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, labels(&["Small", "Large"]));
    }

    // 长度约束: 任意输入下 size_labels.len() == prices.len()
    #[test]
    fn test_decode_length_invariant_holds() {
        let cases = [
            ("", ""),
            ("10", ""),
            ("", "Small"),
            ("a,b,c", "x"),
            ("1,2,3", "S,M,L,XL,XXL"),
            (",,,", ",,,"),
        ];
        for (prices_text, sizes_text) in cases {
            let decoded = decode(prices_text, sizes_text, DEFAULT_SIZE_LABEL);
            assert_eq!(
                decoded.size_labels.len(),
                decoded.prices.len(),
                "prices_text={:?} sizes_text={:?}",
                prices_text,
                sizes_text
            );
        }
    }

    #[test]
    fn test_roundtrip_keeps_pairing() {
        let sizes = labels(&["Small", "Large"]);
        let prices = vec![10.0, 15.0];
        let (sizes_text, prices_text) = encode(&sizes, &prices);
        let decoded = decode(&prices_text, &sizes_text, DEFAULT_SIZE_LABEL);
        assert_eq!(decoded.size_labels, sizes);
        assert_eq!(decoded.prices, prices);
    }
}
