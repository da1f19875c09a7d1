use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::FormField;

/// Per-field validation failure, shown inline next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationError {
    Required,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "Required"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{value:?} is not a valid choice for {field}")]
    InvalidChoice { field: FormField, value: String },

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("request to trade backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trade backend rejected the signal ({status}): {body}")]
    Rejected { status: u16, body: String },
}
