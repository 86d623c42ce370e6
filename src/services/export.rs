//! 数据导出模块
//!
//! 将语料包导出为 JSON 文件，并输出知识记录的换行分隔形式（JSONL），
//! 供批量索引加载使用。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::corpus::CorpusBundle;
use crate::models::knowledge::KnowledgeRecord;

/// 语料包导出器
pub struct BundleExporter;

impl BundleExporter {
    /// 写出完整语料包（pretty JSON）
    pub fn write_bundle(bundle: &CorpusBundle, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, bundle)?;
        writer.flush()?;

        info!("bundle written to {}", path.display());
        Ok(())
    }

    /// 写出知识记录（每行一条）
    pub fn write_jsonl(records: &[KnowledgeRecord], path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        info!(
            records = records.len(),
            "knowledge records written to {}",
            path.display()
        );
        Ok(())
    }
}

/// 创建父目录
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::knowledge::RecordKind;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mnemos_export_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_write_jsonl_one_record_per_line() {
        let records = vec![
            KnowledgeRecord::new(RecordKind::Knowledge, "", "q1", "a1"),
            KnowledgeRecord::new(RecordKind::Knowledge, "", "q2", "a2"),
        ];
        let path = temp_path("records.jsonl");

        BundleExporter::write_jsonl(&records, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        for line in written.lines() {
            let parsed: KnowledgeRecord = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.kind, RecordKind::Knowledge);
        }

        std::fs::remove_file(&path).ok();
    }
}
