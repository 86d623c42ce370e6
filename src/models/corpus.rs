//! 语料包数据模型
//!
//! 单次提取产生一个一致快照；组装后的语料包供导出层序列化。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constants;
use super::equation::Equation;
use super::knowledge::KnowledgeRecord;
use super::metric::Metric;
use super::organism::Organism;
use super::section::Section;

/// 语料统计信息
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusStatistics {
    /// 换行符数量
    pub total_lines: usize,
    /// 原始字符数
    pub total_chars: usize,
    /// 提取的方程数（去重前）
    pub equations_extracted: usize,
    /// 提取的指标数（去重前）
    pub metrics_extracted: usize,
    /// 提取的 Organism 数
    pub organisms_extracted: usize,
    /// 提取的章节数
    pub sections_extracted: usize,
    /// 派生的知识记录数
    pub knowledge_records: usize,
}

/// 语料快照
///
/// 提取一次产生的不可变结果集；指标已按符号去重（后出现者胜出，
/// 首见顺序保留），其余类别按首见顺序、不去重。
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSnapshot {
    /// 方程列表
    pub equations: Vec<Equation>,
    /// 指标列表（已去重）
    pub metrics: Vec<Metric>,
    /// Organism 列表
    pub organisms: Vec<Organism>,
    /// 章节列表
    pub sections: Vec<Section>,
    /// 统计信息
    pub statistics: CorpusStatistics,
}

/// 章节摘要（标题 + 内容长度）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionSummary {
    /// 章节标题
    pub title: String,
    /// 截断后内容长度（字符）
    pub length: usize,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            length: section.content.chars().count(),
        }
    }
}

/// 语料包元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// 语料来源
    pub source: String,
    /// 转换时间
    pub converted_at: DateTime<Utc>,
    /// 格式版本
    pub version: String,
    /// 平台标识
    pub platform: String,
    /// 平台常数表
    pub constants: BTreeMap<String, f64>,
}

/// 导出语料包
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusBundle {
    /// 元数据
    pub metadata: BundleMetadata,
    /// 统计信息
    pub statistics: CorpusStatistics,
    /// 方程列表（不去重）
    pub equations: Vec<Equation>,
    /// 指标列表（按符号去重）
    pub metrics: Vec<Metric>,
    /// Organism 列表（不去重）
    pub organisms: Vec<Organism>,
    /// 章节摘要列表
    pub sections: Vec<SectionSummary>,
    /// 知识记录集
    pub knowledge_records: Vec<KnowledgeRecord>,
}

impl CorpusBundle {
    /// 从快照与派生记录组装语料包
    pub fn assemble(
        snapshot: CorpusSnapshot,
        knowledge_records: Vec<KnowledgeRecord>,
        source: &str,
    ) -> Self {
        let mut statistics = snapshot.statistics;
        statistics.knowledge_records = knowledge_records.len();

        Self {
            metadata: BundleMetadata {
                source: source.to_string(),
                converted_at: Utc::now(),
                version: "1.0.0".to_string(),
                platform: constants::PLATFORM.to_string(),
                constants: constants::constant_table(),
            },
            statistics,
            equations: snapshot.equations,
            metrics: snapshot.metrics,
            organisms: snapshot.organisms,
            sections: snapshot.sections.iter().map(SectionSummary::from).collect(),
            knowledge_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::knowledge::{KnowledgeRecord, RecordKind};

    #[test]
    fn test_assemble_counts_records() {
        let snapshot = CorpusSnapshot {
            equations: Vec::new(),
            metrics: Vec::new(),
            organisms: Vec::new(),
            sections: vec![Section {
                title: "CORE".to_string(),
                content: "x".repeat(120),
                position: 0,
            }],
            statistics: CorpusStatistics {
                sections_extracted: 1,
                ..Default::default()
            },
        };
        let records = vec![KnowledgeRecord::new(RecordKind::Knowledge, "", "q", "a")];

        let bundle = CorpusBundle::assemble(snapshot, records, "masterlog.txt");

        assert_eq!(bundle.statistics.knowledge_records, 1);
        assert_eq!(bundle.sections.len(), 1);
        assert_eq!(bundle.sections[0].length, 120);
        assert_eq!(bundle.metadata.platform, constants::PLATFORM);
    }
}
