// ==========================================
// 菜单目录同步引擎 - 引擎层
// ==========================================
// 职责: 纯业务规则,不做任何 IO
// 红线: 引擎层函数必须是全函数——对任意输入返回确定结果,
//       畸形输入一律归一化而不是报错（表格来自非技术编辑者）
// ==========================================

pub mod row_projector;
pub mod variant_codec;

pub use variant_codec::{DecodedVariants, DEFAULT_SIZE_LABEL};
