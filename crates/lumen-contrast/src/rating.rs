//! WCAG 2.1 conformance rating of a contrast ratio.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum ratio for AAA normal text.
pub const AAA_RATIO: f64 = 7.0;
/// Minimum ratio for AA normal text.
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for AA large text.
pub const AA_LARGE_RATIO: f64 = 3.0;

/// Conformance level met by a contrast ratio, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA-large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Rating {
    /// Smallest ratio that earns this rating.
    pub fn min_ratio(self) -> f64 {
        match self {
            Self::Aaa => AAA_RATIO,
            Self::Aa => AA_RATIO,
            Self::AaLarge => AA_LARGE_RATIO,
            Self::Fail => 0.0,
        }
    }

    /// Whether this rating meets or exceeds `level`.
    pub fn passes(self, level: Rating) -> bool {
        self >= level
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA-large",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a ratio, checking the highest threshold first.
pub fn classify_rating(ratio: f64) -> Rating {
    if ratio >= AAA_RATIO {
        Rating::Aaa
    } else if ratio >= AA_RATIO {
        Rating::Aa
    } else if ratio >= AA_LARGE_RATIO {
        Rating::AaLarge
    } else {
        Rating::Fail
    }
}
