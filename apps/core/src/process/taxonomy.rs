//! The canonical seven-stage software-delivery taxonomy.
//!
//! Order is an invariant: chart axes and list views consume `ALL` as-is, and
//! input data never reorders it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    Requirements,
    BasicDesign,
    DetailedDesign,
    Implementation,
    Testing,
    Deployment,
    Operation,
}

impl ProcessType {
    /// Every process type, in fixed presentation order.
    pub const ALL: [ProcessType; 7] = [
        ProcessType::Requirements,
        ProcessType::BasicDesign,
        ProcessType::DetailedDesign,
        ProcessType::Implementation,
        ProcessType::Testing,
        ProcessType::Deployment,
        ProcessType::Operation,
    ];

    /// Wire key used by the collaborator API.
    pub fn key(self) -> &'static str {
        match self {
            ProcessType::Requirements => "requirements",
            ProcessType::BasicDesign => "basic_design",
            ProcessType::DetailedDesign => "detailed_design",
            ProcessType::Implementation => "implementation",
            ProcessType::Testing => "testing",
            ProcessType::Deployment => "deployment",
            ProcessType::Operation => "operation",
        }
    }

    /// Fixed display label.
    pub fn label(self) -> &'static str {
        match self {
            ProcessType::Requirements => "要件定義",
            ProcessType::BasicDesign => "基本設計",
            ProcessType::DetailedDesign => "詳細設計",
            ProcessType::Implementation => "実装",
            ProcessType::Testing => "試験",
            ProcessType::Deployment => "デプロイ/リリース",
            ProcessType::Operation => "運用/保守",
        }
    }

    /// Parses a wire key. Unknown keys are `None` — the caller decides how to
    /// degrade; nothing here panics.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Position in the fixed presentation order.
    pub fn order(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}
