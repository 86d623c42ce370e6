//! Corpus Builder Service
//!
//! Drives the extractor over one corpus in a single blocking pass,
//! deduplicates metrics and assembles aggregate statistics. Extraction
//! categories are independent of each other; the resulting snapshot is
//! immutable and consistent.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::config::config::ExtractionConfig;
use crate::error::{AppError, Result};
use crate::extraction::text::decode_lossy;
use crate::extraction::{CorpusExtraction, Extractor};
use crate::models::corpus::{CorpusSnapshot, CorpusStatistics};
use crate::models::metric::Metric;

/// Corpus builder
pub struct CorpusBuilder {
    extractor: Extractor,
}

impl CorpusBuilder {
    /// Create a builder with its own compiled extractor.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        Ok(Self {
            extractor: Extractor::new(config)?,
        })
    }

    /// Read and process a corpus file.
    ///
    /// Bytes are decoded permissively (invalid sequences dropped). A missing
    /// or unreadable source is fatal to the extraction path.
    pub fn build_from_file(&self, path: &Path) -> Result<CorpusSnapshot> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::CorpusSource(format!("{}: {}", path.display(), e)))?;
        Ok(self.build(&decode_lossy(&bytes)))
    }

    /// Process corpus text already in memory.
    pub fn build(&self, content: &str) -> CorpusSnapshot {
        let CorpusExtraction {
            equations,
            metrics,
            organisms,
            sections,
        } = self.extractor.extract(content);

        let raw_metric_count = metrics.len();
        let metrics = dedupe_metrics(metrics);

        let statistics = CorpusStatistics {
            total_lines: content.matches('\n').count(),
            total_chars: content.chars().count(),
            equations_extracted: equations.len(),
            metrics_extracted: raw_metric_count,
            organisms_extracted: organisms.len(),
            sections_extracted: sections.len(),
            knowledge_records: 0,
        };

        info!(
            equations = statistics.equations_extracted,
            metrics = statistics.metrics_extracted,
            organisms = statistics.organisms_extracted,
            sections = statistics.sections_extracted,
            "corpus extraction complete"
        );

        CorpusSnapshot {
            equations,
            metrics,
            organisms,
            sections,
            statistics,
        }
    }
}

/// 按符号去重：后出现者覆盖先出现者，首见顺序保留
fn dedupe_metrics(metrics: Vec<Metric>) -> Vec<Metric> {
    let mut deduped: Vec<Metric> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for metric in metrics {
        match seen.get(&metric.symbol) {
            Some(&at) => deduped[at] = metric,
            None => {
                seen.insert(metric.symbol.clone(), deduped.len());
                deduped.push(metric);
            }
        }
    }

    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metric::MetricName;

    fn builder() -> CorpusBuilder {
        CorpusBuilder::new(ExtractionConfig {
            section_min_chars: 50,
            section_max_chars: 2000,
            organism_excerpt_chars: 500,
        })
        .unwrap()
    }

    #[test]
    fn test_metric_dedup_last_wins() {
        let snapshot = builder().build("Φ=0.70 drift Λ=0.85 drift Φ=0.80");

        assert_eq!(snapshot.metrics.len(), 2);
        assert_eq!(snapshot.metrics[0].symbol, "Φ");
        assert_eq!(snapshot.metrics[0].value, 0.80);
        assert_eq!(snapshot.metrics[0].name, MetricName::Consciousness);
        assert_eq!(snapshot.metrics[1].symbol, "Λ");
        // 去重前的原始计数进入统计
        assert_eq!(snapshot.statistics.metrics_extracted, 3);
    }

    #[test]
    fn test_statistics_count_raw_text() {
        let snapshot = builder().build("line one\nline two\n");

        assert_eq!(snapshot.statistics.total_lines, 2);
        assert_eq!(snapshot.statistics.total_chars, 18);
    }

    #[test]
    fn test_missing_corpus_is_fatal() {
        let result = builder().build_from_file(Path::new("/nonexistent/masterlog.txt"));
        assert!(matches!(result, Err(AppError::CorpusSource(_))));
    }

    #[test]
    fn test_build_is_deterministic() {
        let corpus = "(1) a=b\nΦ=0.7\nΩ[S] = x\nΞ_S = y";
        let b = builder();
        assert_eq!(b.build(corpus), b.build(corpus));
    }
}
