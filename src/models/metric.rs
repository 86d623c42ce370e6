use serde::{Deserialize, Serialize};

/// 指标规范名枚举
///
/// 符号到规范名的映射是有限枚举；未知符号显式标记为 Unknown。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricName {
    /// Φ - 意识度（IIT 整合信息）
    Consciousness,

    /// Λ - 相干保持度
    Coherence,

    /// Γ - 退相干率
    Decoherence,

    /// Ξ - 负熵效率
    Efficiency,

    /// 未映射符号
    Unknown,
}

impl MetricName {
    /// 由大写符号映射规范名
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "Φ" | "PHI" => MetricName::Consciousness,
            "Λ" | "LAMBDA" => MetricName::Coherence,
            "Γ" | "GAMMA" => MetricName::Decoherence,
            "Ξ" | "XI" => MetricName::Efficiency,
            _ => MetricName::Unknown,
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MetricName::Consciousness => "consciousness",
            MetricName::Coherence => "coherence",
            MetricName::Decoherence => "decoherence",
            MetricName::Efficiency => "efficiency",
            MetricName::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// 标量指标
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    /// 符号（大写规范形式）
    pub symbol: String,

    /// 规范名
    pub name: MetricName,

    /// 数值
    pub value: f64,

    /// 所属域
    pub domain: String,
}

impl Metric {
    /// 创建 CCCE 域指标
    pub fn ccce(symbol: &str, value: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: MetricName::from_symbol(symbol),
            value,
            domain: "ccce".to_string(),
        }
    }
}
