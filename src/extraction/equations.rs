//! Equation extraction.
//!
//! Numbered equations carry their printed number. Symbolic equations are
//! matched against a fixed, ordered pattern list and numbered by a single
//! monotonic counter shared across all symbolic patterns, so ids are stable
//! for a given corpus.

use regex::Regex;

use super::text::TextCleaner;
use crate::error::Result;
use crate::models::equation::{Equation, EquationKind};

/// Compiled equation patterns.
pub struct EquationPatterns {
    numbered: Regex,
    symbolic: Vec<(Regex, EquationKind)>,
}

impl EquationPatterns {
    pub fn compile() -> Result<Self> {
        let symbolic = vec![
            (
                Regex::new(r"Ω\[S\]\s*=\s*([^\n]+)")?,
                EquationKind::SessionFunctional,
            ),
            (Regex::new(r"Ξ_S\s*=\s*([^\n]+)")?, EquationKind::CcceMetric),
            (
                Regex::new(r"T_μν\s*=\s*([^\n]+)")?,
                EquationKind::TensorDefinition,
            ),
            (
                Regex::new(r"R_αβ\s*=\s*([^\n]+)")?,
                EquationKind::ResourceMatrix,
            ),
            (
                Regex::new(r"L\(s\)\s*=\s*([^\n]+)")?,
                EquationKind::EffortFunctional,
            ),
            (
                Regex::new(r"C_μ\s*=\s*([^\n]+)")?,
                EquationKind::CapabilityTensor,
            ),
            (
                Regex::new(r"Ω_R\s*=\s*([^\n]+)")?,
                EquationKind::ReadinessScore,
            ),
        ];

        Ok(Self {
            numbered: Regex::new(r"\((\d+)\)\s+([^\n]+)")?,
            symbolic,
        })
    }

    /// Extract numbered then symbolic equations, each in document order.
    pub fn extract(&self, content: &str, cleaner: &TextCleaner) -> Vec<Equation> {
        let mut equations = Vec::new();

        for caps in self.numbered.captures_iter(content) {
            equations.push(Equation::numbered(&caps[1], cleaner.clean(&caps[2])));
        }

        // Counter spans all symbolic patterns; pattern order is fixed.
        let mut ordinal = 0usize;
        for (pattern, kind) in &self.symbolic {
            for caps in pattern.captures_iter(content) {
                equations.push(Equation::symbolic(*kind, ordinal, cleaner.clean(&caps[1])));
                ordinal += 1;
            }
        }

        equations
    }
}
