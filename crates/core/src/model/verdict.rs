use serde::{Deserialize, Serialize};

/// Pass/fail label for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Passed,
    TryAgain,
}

impl Verdict {
    /// Passed iff `score > total / 2` under real division.
    ///
    /// Evaluated as `2 * score > total` so odd totals need no float math.
    /// A zero-question session always yields `TryAgain`.
    #[must_use]
    pub fn from_score(score: u32, total: usize) -> Self {
        let doubled = u64::from(score).saturating_mul(2);
        let total = u64::try_from(total).unwrap_or(u64::MAX);
        if doubled > total {
            Self::Passed
        } else {
            Self::TryAgain
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::TryAgain => "Try Again",
        }
    }
}
