//! Knowledge base loading and indexing.
//!
//! Wraps the record set and its inverted index as one immutable snapshot.
//! A missing source degrades to an empty knowledge base; malformed record
//! lines are skipped individually without aborting the load.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::config::IndexConfig;
use crate::extraction::text::decode_lossy;
use crate::index::inverted::InvertedIndex;
use crate::models::knowledge::KnowledgeRecord;

/// 知识库：记录集 + 倒排索引
pub struct KnowledgeBase {
    records: Vec<KnowledgeRecord>,
    index: InvertedIndex,
}

impl KnowledgeBase {
    /// Build from in-memory records.
    pub fn from_records(records: Vec<KnowledgeRecord>, config: &IndexConfig) -> Self {
        let index = InvertedIndex::build(&records, config);
        Self { records, index }
    }

    /// Load newline-delimited records and build the index.
    pub fn load_jsonl(path: &Path, config: &IndexConfig) -> Self {
        let raw = match std::fs::read(path) {
            Ok(bytes) => decode_lossy(&bytes),
            Err(e) => {
                warn!("knowledge source {} unavailable: {}", path.display(), e);
                return Self::from_records(Vec::new(), config);
            }
        };

        let mut records = Vec::new();
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<KnowledgeRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => debug!("skipping malformed record at line {}: {}", line_no + 1, e),
            }
        }

        Self::from_records(records, config)
    }

    /// 全部记录
    pub fn records(&self) -> &[KnowledgeRecord] {
        &self.records
    }

    /// 按位置取记录
    pub fn get(&self, position: usize) -> Option<&KnowledgeRecord> {
        self.records.get(position)
    }

    /// 倒排索引
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::knowledge::RecordKind;
    use std::path::PathBuf;

    fn config() -> IndexConfig {
        IndexConfig { min_token_chars: 4 }
    }

    #[test]
    fn test_missing_source_degrades_to_empty() {
        let path = PathBuf::from("/nonexistent/mnemos/knowledge.jsonl");
        let kb = KnowledgeBase::load_jsonl(&path, &config());
        assert!(kb.is_empty());
    }

    #[test]
    fn test_from_records_builds_index() {
        let records = vec![KnowledgeRecord::new(
            RecordKind::Knowledge,
            "",
            "What is coherence?",
            "Preservation fidelity.",
        )];
        let kb = KnowledgeBase::from_records(records, &config());

        assert_eq!(kb.len(), 1);
        assert!(kb.index().postings("coherence?").is_some());
        assert!(kb.get(0).is_some());
        assert!(kb.get(1).is_none());
    }
}
