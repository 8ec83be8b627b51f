// ==========================================
// 菜单目录同步引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换内层错误为用户友好的错误消息
// ==========================================

use thiserror::Error;

/// API层错误类型
///
/// 业务层面的"失败"（空文件、写入被拒等）不走这里,
/// 而是作为 success=false 的响应返回;这里只承载
/// 基础设施层面的错误（建库失败、仓储不可用等）。
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),
}
