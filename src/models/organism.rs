use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 基因定义
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gene {
    /// 基因名
    pub name: String,

    /// 定义文本（归一化后）
    pub definition: String,
}

/// DNA-Lang Organism 定义
///
/// 名称在语料内不保证唯一。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organism {
    /// Organism 名称
    pub name: String,

    /// META 块键值对
    pub meta: BTreeMap<String, String>,

    /// GENE 子块（按出现顺序）
    pub genes: Vec<Gene>,

    /// 原始正文节选
    #[serde(rename = "raw")]
    pub excerpt: String,
}

impl Organism {
    /// 基因名清单，用于合成描述
    pub fn gene_roster(&self) -> String {
        self.genes
            .iter()
            .map(|gene| gene.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_roster() {
        let organism = Organism {
            name: "Foo".to_string(),
            meta: BTreeMap::new(),
            genes: vec![
                Gene {
                    name: "g1".to_string(),
                    definition: "def1".to_string(),
                },
                Gene {
                    name: "g2".to_string(),
                    definition: "def2".to_string(),
                },
            ],
            excerpt: String::new(),
        };
        assert_eq!(organism.gene_roster(), "g1, g2");
    }
}
