//! 结构化提取模块
//!
//! 以模式驱动的方式从原始语料中提取四类结构化记录：
//! 方程（编号/符号）、标量指标、Organism 定义与章节。
//! 各类别相互独立，单次扫描完成，结果不可变。

pub mod equations;
pub mod metrics;
pub mod organisms;
pub mod sections;
pub mod span;
pub mod text;

pub use equations::EquationPatterns;
pub use metrics::MetricPattern;
pub use organisms::OrganismPatterns;
pub use sections::SectionPattern;
pub use span::balanced_span;
pub use text::TextCleaner;

use crate::config::config::ExtractionConfig;
use crate::error::Result;
use crate::models::equation::Equation;
use crate::models::metric::Metric;
use crate::models::organism::Organism;
use crate::models::section::Section;

/// 单次提取的原始结果（未去重）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusExtraction {
    /// 方程列表
    pub equations: Vec<Equation>,
    /// 指标列表（含重复符号）
    pub metrics: Vec<Metric>,
    /// Organism 列表
    pub organisms: Vec<Organism>,
    /// 章节列表
    pub sections: Vec<Section>,
}

/// 结构化提取器
///
/// 持有编译好的模式与显式不可变配置；构造一次，可重复使用。
pub struct Extractor {
    config: ExtractionConfig,
    cleaner: TextCleaner,
    equations: EquationPatterns,
    metrics: MetricPattern,
    organisms: OrganismPatterns,
    sections: SectionPattern,
}

impl Extractor {
    /// 编译全部提取模式
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        Ok(Self {
            config,
            cleaner: TextCleaner::compile()?,
            equations: EquationPatterns::compile()?,
            metrics: MetricPattern::compile()?,
            organisms: OrganismPatterns::compile()?,
            sections: SectionPattern::compile()?,
        })
    }

    /// 提取配置
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// 对语料执行一次完整提取
    pub fn extract(&self, content: &str) -> CorpusExtraction {
        CorpusExtraction {
            equations: self.equations.extract(content, &self.cleaner),
            metrics: self.metrics.extract(content),
            organisms: self.organisms.extract(
                content,
                self.config.organism_excerpt_chars,
                &self.cleaner,
            ),
            sections: self.sections.extract(content, &self.config, &self.cleaner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_runs_all_categories() {
        let extractor = Extractor::new(ExtractionConfig {
            section_min_chars: 50,
            section_max_chars: 2000,
            organism_excerpt_chars: 500,
        })
        .unwrap();

        let corpus = format!(
            "(1) Ω = L·U\nΦ=0.78\nORGANISM Foo {{ GENE g {{ d }} }}\n═══\nCORE NOTES\n═══\n{}",
            "n".repeat(80),
        );
        let extraction = extractor.extract(&corpus);

        assert_eq!(extraction.equations.len(), 1);
        assert_eq!(extraction.metrics.len(), 1);
        assert_eq!(extraction.organisms.len(), 1);
        assert_eq!(extraction.sections.len(), 1);
    }
}
