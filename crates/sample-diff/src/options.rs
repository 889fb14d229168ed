//! Tuning knobs for a comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an option name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// LCS engine used for row alignment and inline diffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentAlgorithm {
    /// Myers' O(ND) difference algorithm.
    #[default]
    Myers,
    /// Patience diff, anchored on unique elements.
    Patience,
    /// Classic dynamic-programming longest common subsequence.
    Lcs,
}

impl From<AlignmentAlgorithm> for similar::Algorithm {
    fn from(algorithm: AlignmentAlgorithm) -> Self {
        match algorithm {
            AlignmentAlgorithm::Myers => similar::Algorithm::Myers,
            AlignmentAlgorithm::Patience => similar::Algorithm::Patience,
            AlignmentAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

impl FromStr for AlignmentAlgorithm {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            "lcs" => Ok(Self::Lcs),
            _ => Err(UnknownOption {
                kind: "algorithm",
                value: s.to_string(),
                expected: "myers, patience, lcs",
            }),
        }
    }
}

impl fmt::Display for AlignmentAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        })
    }
}

/// Token unit for inline diffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineGranularity {
    /// Runs of non-whitespace and runs of whitespace.
    #[default]
    Words,
    /// Unicode scalar values.
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

impl FromStr for InlineGranularity {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(Self::Words),
            "chars" => Ok(Self::Chars),
            "graphemes" => Ok(Self::Graphemes),
            _ => Err(UnknownOption {
                kind: "granularity",
                value: s.to_string(),
                expected: "words, chars, graphemes",
            }),
        }
    }
}

impl fmt::Display for InlineGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Words => "words",
            Self::Chars => "chars",
            Self::Graphemes => "graphemes",
        })
    }
}

/// Options for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiffOptions {
    pub algorithm: AlignmentAlgorithm,
    pub granularity: InlineGranularity,
    /// Compute per-column inline diffs for changed rows.
    pub inline: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: AlignmentAlgorithm::default(),
            granularity: InlineGranularity::default(),
            inline: true,
        }
    }
}
