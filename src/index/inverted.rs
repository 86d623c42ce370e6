//! 倒排索引
//!
//! token → 记录位置列表。token 在一条记录中每出现一次就追加一次该
//! 记录的位置，词频因此隐式编码在倒排表里，无需单独的计数字段。

use std::collections::HashMap;

use crate::config::config::IndexConfig;
use crate::models::knowledge::KnowledgeRecord;

/// 内存倒排索引
///
/// 单次构建，构建后只读；重建需要从头再来一遍。
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<usize>>,
    min_token_chars: usize,
}

impl InvertedIndex {
    /// 从知识记录集构建索引
    pub fn build(records: &[KnowledgeRecord], config: &IndexConfig) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let text = record.indexed_text().to_lowercase();
            for word in text.split_whitespace() {
                // 短词过滤，轻量停用词启发
                if word.chars().count() >= config.min_token_chars {
                    postings.entry(word.to_string()).or_default().push(position);
                }
            }
        }

        Self {
            postings,
            min_token_chars: config.min_token_chars,
        }
    }

    /// 某 token 的倒排表（每次出现一个条目）
    pub fn postings(&self, token: &str) -> Option<&[usize]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// 词表大小
    pub fn vocabulary_len(&self) -> usize {
        self.postings.len()
    }

    /// 进入索引的最小 token 长度
    pub fn min_token_chars(&self) -> usize {
        self.min_token_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::knowledge::RecordKind;

    fn record(instruction: &str, response: &str) -> KnowledgeRecord {
        KnowledgeRecord::new(RecordKind::Knowledge, "", instruction, response)
    }

    fn config() -> IndexConfig {
        IndexConfig { min_token_chars: 4 }
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let records = vec![record("it is the law", "old cat sat")];
        let index = InvertedIndex::build(&records, &config());

        assert!(index.postings("the").is_none());
        assert!(index.postings("cat").is_none());
        assert!(index.postings("is").is_none());
    }

    #[test]
    fn test_occurrences_are_appended_per_hit() {
        let records = vec![
            record("coherence", "coherence preserved"),
            record("decoherence spike", "coherence lost"),
        ];
        let index = InvertedIndex::build(&records, &config());

        assert_eq!(index.postings("coherence"), Some(&[0usize, 0, 1][..]));
        assert_eq!(index.postings("decoherence"), Some(&[1usize][..]));
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let records = vec![record("CCCE Metrics", "")];
        let index = InvertedIndex::build(&records, &config());

        assert!(index.postings("ccce").is_some());
        assert!(index.postings("CCCE").is_none());
    }

    #[test]
    fn test_empty_records_yield_empty_index() {
        let index = InvertedIndex::build(&[], &config());
        assert_eq!(index.vocabulary_len(), 0);
    }
}
