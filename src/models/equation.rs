use serde::{Deserialize, Serialize};

/// 方程类别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    /// 编号方程 - (n) 前缀的治理方程
    Numbered,

    /// 会话泛函 Ω[S]
    SessionFunctional,

    /// CCCE 指标方程 Ξ_S
    CcceMetric,

    /// 张量定义 T_μν
    TensorDefinition,

    /// 资源矩阵 R_αβ
    ResourceMatrix,

    /// 努力泛函 L(s)
    EffortFunctional,

    /// 能力张量 C_μ
    CapabilityTensor,

    /// 就绪评分 Ω_R
    ReadinessScore,
}

impl EquationKind {
    /// 人类可读短语，用于合成问句
    pub fn phrase(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

impl std::fmt::Display for EquationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EquationKind::Numbered => "numbered",
            EquationKind::SessionFunctional => "session_functional",
            EquationKind::CcceMetric => "ccce_metric",
            EquationKind::TensorDefinition => "tensor_definition",
            EquationKind::ResourceMatrix => "resource_matrix",
            EquationKind::EffortFunctional => "effort_functional",
            EquationKind::CapabilityTensor => "capability_tensor",
            EquationKind::ReadinessScore => "readiness_score",
        };
        write!(f, "{}", name)
    }
}

/// 方程记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equation {
    /// 方程标识
    pub id: String,

    /// 公式文本（归一化后）
    pub formula: String,

    /// 方程类别
    #[serde(rename = "type")]
    pub kind: EquationKind,
}

impl Equation {
    /// 编号方程：id 取自原文编号
    pub fn numbered(number: &str, formula: String) -> Self {
        Self {
            id: format!("EQ_{}", number),
            formula,
            kind: EquationKind::Numbered,
        }
    }

    /// 符号方程：id 由类别与单调序号派生
    pub fn symbolic(kind: EquationKind, ordinal: usize, formula: String) -> Self {
        Self {
            id: format!("{}_{}", kind, ordinal),
            formula,
            kind,
        }
    }
}
