use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 记录类别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// 章节讲解记录
    Instruction,

    /// 方程记录
    Equation,

    /// Organism 描述记录
    Organism,

    /// 基础问答知识
    Knowledge,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Instruction => "instruction",
            RecordKind::Equation => "equation",
            RecordKind::Organism => "organism",
            RecordKind::Knowledge => "knowledge",
        };
        write!(f, "{}", name)
    }
}

/// 知识记录
///
/// 由合成器从结构化提取结果确定性派生，是索引与检索的唯一输入形态。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeRecord {
    /// 记录类别
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// 系统提示词
    #[serde(default)]
    pub system: String,

    /// 指令（问题侧）
    pub instruction: String,

    /// 响应（答案侧）
    pub response: String,

    /// 附加元数据
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl KnowledgeRecord {
    /// 创建新知识记录
    pub fn new(kind: RecordKind, system: &str, instruction: &str, response: &str) -> Self {
        Self {
            kind,
            system: system.to_string(),
            instruction: instruction.to_string(),
            response: response.to_string(),
            metadata: BTreeMap::new(),
        }
    }

    /// 添加元数据
    pub fn with_meta(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// 索引文本：instruction 与 response 拼接
    pub fn indexed_text(&self) -> String {
        format!("{} {}", self.instruction, self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_roundtrip() {
        let record = KnowledgeRecord::new(
            RecordKind::Equation,
            "system prompt",
            "What is the formula?",
            "E=mc^2",
        )
        .with_meta("equation_id", json!("EQ_1"));

        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"type\":\"equation\""));

        let parsed: KnowledgeRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_indexed_text_concatenation() {
        let record = KnowledgeRecord::new(RecordKind::Knowledge, "", "What is CCCE?", "An engine.");
        assert_eq!(record.indexed_text(), "What is CCCE? An engine.");
    }

    #[test]
    fn test_metadata_defaults_when_absent() {
        let parsed: KnowledgeRecord = serde_json::from_str(
            r#"{"type":"knowledge","instruction":"q","response":"a"}"#,
        )
        .unwrap();
        assert!(parsed.system.is_empty());
        assert!(parsed.metadata.is_empty());
    }
}
