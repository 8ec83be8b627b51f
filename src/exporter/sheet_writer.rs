// ==========================================
// 菜单目录同步引擎 - 表格写入器实现
// ==========================================
// 职责: 平面记录 → CSV 字节流 → 落盘
// 约束: 先在内存生成完整内容再一次写盘,写入失败不留半截文件
// ==========================================

use crate::domain::catalog::FlatRecord;
use crate::exporter::error::ExportError;
use crate::importer::field_mapper::headers;
use csv::WriterBuilder;
use std::error::Error;
use std::path::Path;

// ==========================================
// SheetWriter Trait
// ==========================================
// 用途: 表格写入接口
// 实现者: CsvSheetWriter
pub trait SheetWriter: Send + Sync {
    /// 将平面记录写为表格文件（含固定表头）
    fn write_records(
        &self,
        file_path: &Path,
        records: &[FlatRecord],
    ) -> Result<(), Box<dyn Error>>;
}

// ==========================================
// CSV 写入器实现
// ==========================================
pub struct CsvSheetWriter;

impl SheetWriter for CsvSheetWriter {
    fn write_records(
        &self,
        file_path: &Path,
        records: &[FlatRecord],
    ) -> Result<(), Box<dyn Error>> {
        // 先在内存生成完整 CSV
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        // 表头与导入侧识别的标准列名一致,保证往返可导
        writer
            .write_record(headers::EXPORT_ORDER)
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        for record in records {
            writer
                .write_record([
                    record.category_name_primary.as_str(),
                    record.category_name_secondary.as_str(),
                    record.category_emoji.as_str(),
                    record.item_title_primary.as_str(),
                    record.item_title_secondary.as_str(),
                    record.item_desc_primary.as_str(),
                    record.item_desc_secondary.as_str(),
                    record.sizes_text.as_str(),
                    record.prices_text.as_str(),
                    record.popular_text.as_str(),
                    record.spicy_text.as_str(),
                ])
                .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        // 一次写盘
        std::fs::write(file_path, bytes).map_err(ExportError::from)?;

        Ok(())
    }
}
