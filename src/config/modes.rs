//! Ungraded submission policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a submission whose student has no grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UngradedPolicy {
    /// Rename it with the "NA" grade marker (default).
    #[default]
    Label,
    /// Leave it out of the package entirely.
    Skip,
}

impl fmt::Display for UngradedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UngradedPolicy::Label => write!(f, "label"),
            UngradedPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for UngradedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "label" => Ok(UngradedPolicy::Label),
            "skip" => Ok(UngradedPolicy::Skip),
            _ => Err(format!("Unknown ungraded policy: {}", s)),
        }
    }
}
