// ==========================================
// 菜单目录同步引擎 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // 空目录不产出文件,由调用方决定如何提示
    #[error("租户没有任何分类,未生成导出文件")]
    NoCategories,

    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    #[error("配置读取失败: {0}")]
    ConfigReadError(String),

    #[error("导出文件写入失败: {0}")]
    WriteFailed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
