//! 平台物理常数
//!
//! 用于合成基础知识与导出元数据的固定常数表。

use std::collections::BTreeMap;

/// 平台标识
pub const PLATFORM: &str = "DNA::}{::lang";

/// 通用记忆常数 ΛΦ
pub const LAMBDA_PHI: f64 = 2.176435e-8;

/// 扭锁角 θ_lock（度）
pub const THETA_LOCK: f64 = 51.843;

/// 意识阈值 Φ_threshold
pub const PHI_THRESHOLD: f64 = 0.7734;

/// 固定退相干率 Γ_fixed
pub const GAMMA_FIXED: f64 = 0.092;

/// 相共轭合规度 χ_pc
pub const CHI_PC: f64 = 0.869;

/// 黄金比例
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// 常数表（导出用，键序稳定）
pub fn constant_table() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("LAMBDA_PHI".to_string(), LAMBDA_PHI),
        ("THETA_LOCK".to_string(), THETA_LOCK),
        ("PHI_THRESHOLD".to_string(), PHI_THRESHOLD),
        ("GAMMA_FIXED".to_string(), GAMMA_FIXED),
        ("CHI_PC".to_string(), CHI_PC),
        ("GOLDEN_RATIO".to_string(), GOLDEN_RATIO),
    ])
}
