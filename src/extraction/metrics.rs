//! 指标提取

use regex::Regex;

use crate::error::Result;
use crate::models::metric::Metric;

/// CCCE 指标模式
pub struct MetricPattern {
    ccce: Regex,
}

impl MetricPattern {
    /// 编译指标模式
    ///
    /// 数字字面量贪婪匹配全部连续的数字与点号，因此匹配结果之后
    /// 不可能紧跟另一个数字或点号。
    pub fn compile() -> Result<Self> {
        Ok(Self {
            ccce: Regex::new(r"(?i)(Φ|Λ|Γ|Ξ|phi|lambda|gamma|xi)[_\s]*[=:]\s*([0-9.]+)")?,
        })
    }

    /// 提取全部指标（不去重，按出现顺序）
    pub fn extract(&self, content: &str) -> Vec<Metric> {
        let mut metrics = Vec::new();

        for caps in self.ccce.captures_iter(content) {
            let symbol = caps[1].to_uppercase();
            // 非法数字字面量直接丢弃
            let Ok(value) = caps[2].parse::<f64>() else {
                continue;
            };
            metrics.push(Metric::ccce(&symbol, value));
        }

        metrics
    }
}
