use serde::Serialize;

use crate::range::RangeViolation;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    RangeViolation(#[from] RangeViolation),

    #[error("malformed tag: 0x{tag:02x}")]
    MalformedTag { tag: u8 },

    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    RangeViolation,
    MalformedTag,
    TruncatedInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RangeViolation(_) => ErrorKind::RangeViolation,
            Self::MalformedTag { .. } => ErrorKind::MalformedTag,
            Self::TruncatedInput { .. } => ErrorKind::TruncatedInput,
        }
    }

    pub fn range_violation(&self) -> Option<&RangeViolation> {
        match self {
            Self::RangeViolation(v) => Some(v),
            Self::MalformedTag { .. } | Self::TruncatedInput { .. } => None,
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        let range = self.range_violation();
        Diagnostic {
            kind: self.kind(),
            message: self.to_string(),
            observed: range.map(RangeViolation::observed),
            adjusted: range.map(RangeViolation::adjusted_magnitude),
        }
    }
}

/// Serializable report of an [`Error`] for handing a decode failure across a
/// host/runtime boundary.
///
/// `observed` and `adjusted` are only present for range violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<i128>,
}

impl Diagnostic {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
