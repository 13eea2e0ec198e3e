use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlattenError;

/// The category of a validation directive inside a field's rule set.
///
/// The vocabulary is closed. Each kind may appear at most once per field,
/// and its name is what re-wraps the rule value in a flattened entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    Email,
    Min,
    Max,
    Regex,
    Domain,
    Url,
    Date,
    Extra,
    #[serde(rename = "extra_1")]
    Extra1,
    #[serde(rename = "extra_2")]
    Extra2,
}

impl RuleKind {
    /// Every rule kind, in declaration order.
    pub const ALL: [RuleKind; 11] = [
        Self::Required,
        Self::Email,
        Self::Min,
        Self::Max,
        Self::Regex,
        Self::Domain,
        Self::Url,
        Self::Date,
        Self::Extra,
        Self::Extra1,
        Self::Extra2,
    ];

    /// The canonical name, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Min => "min",
            Self::Max => "max",
            Self::Regex => "regex",
            Self::Domain => "domain",
            Self::Url => "url",
            Self::Date => "date",
            Self::Extra => "extra",
            Self::Extra1 => "extra_1",
            Self::Extra2 => "extra_2",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = FlattenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FlattenError::UnknownRuleKind { name: s.to_owned() })
    }
}
