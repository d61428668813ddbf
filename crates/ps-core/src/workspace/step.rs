use serde::{Deserialize, Serialize};

/// Wizard flow step.
///
/// 向导步骤：严格线性，Success 为终态。
///
/// Forward movement is gated by the current step's validation; backward
/// movement is always permitted while there is somewhere to go back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Params,
    Security,
    Permissions,
    Review,
    Success,
}

impl WizardStep {
    /// The step reached by a successful `advance()`. `Review` has no
    /// `advance()` successor: it is left through submission only.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Params => Some(Self::Security),
            Self::Security => Some(Self::Permissions),
            Self::Permissions => Some(Self::Review),
            Self::Review | Self::Success => None,
        }
    }

    /// The step reached by `retreat()`.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Params => None,
            Self::Security => Some(Self::Params),
            Self::Permissions => Some(Self::Security),
            Self::Review => Some(Self::Permissions),
            // Terminal: the created workspace cannot be un-created.
            Self::Success => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Zero-based position used for step indicators.
    pub fn index(self) -> usize {
        match self {
            Self::Params => 0,
            Self::Security => 1,
            Self::Permissions => 2,
            Self::Review => 3,
            Self::Success => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Params => "Parameters",
            Self::Security => "Security",
            Self::Permissions => "Permissions",
            Self::Review => "Review",
            Self::Success => "Success",
        }
    }
}
