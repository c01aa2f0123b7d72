//! Proposal view model
//!
//! `RawProposal` mirrors whatever the caller hands over (every field may be
//! missing); `ProposalViewModel` is the validated form the renderer accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// A displayable scalar or pre-formatted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Bool(b) => write!(f, "{}", b),
            DisplayValue::Integer(n) => write!(f, "{}", n),
            DisplayValue::Float(x) => write!(f, "{}", x),
            DisplayValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        DisplayValue::Text(s)
    }
}

impl From<i64> for DisplayValue {
    fn from(n: i64) -> Self {
        DisplayValue::Integer(n)
    }
}

impl From<f64> for DisplayValue {
    fn from(x: f64) -> Self {
        DisplayValue::Float(x)
    }
}

impl From<bool> for DisplayValue {
    fn from(b: bool) -> Self {
        DisplayValue::Bool(b)
    }
}

/// Unvalidated proposal as received from JavaScript or JSON
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposal {
    pub question: Option<String>,
    pub destination: Option<String>,
    #[serde(default)]
    pub value: Option<DisplayValue>,
    pub data: Option<DisplayValue>,
    pub yes_count: Option<u64>,
    pub no_count: Option<u64>,
}

/// Validated proposal data for one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawProposal")]
pub struct ProposalViewModel {
    pub question: String,
    pub destination: String,
    /// Optional value region content; rendered empty when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<DisplayValue>,
    pub data: DisplayValue,
    pub yes_count: u64,
    pub no_count: u64,
}

impl ProposalViewModel {
    pub fn new(
        question: impl Into<String>,
        destination: impl Into<String>,
        data: impl Into<DisplayValue>,
        yes_count: u64,
        no_count: u64,
    ) -> Self {
        Self {
            question: question.into(),
            destination: destination.into(),
            value: None,
            data: data.into(),
            yes_count,
            no_count,
        }
    }

    /// Set the optional value region
    pub fn with_value(mut self, value: impl Into<DisplayValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Parse and validate a JSON proposal object.
    ///
    /// Decoding failures map to `InvalidInput`; absent fields map to
    /// `MissingField` naming the first one missing.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let raw: RawProposal =
            serde_json::from_str(json).map_err(|e| RenderError::InvalidInput(e.to_string()))?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawProposal> for ProposalViewModel {
    type Error = RenderError;

    fn try_from(raw: RawProposal) -> Result<Self, Self::Error> {
        Ok(Self {
            question: raw.question.ok_or(RenderError::MissingField("question"))?,
            destination: raw.destination.ok_or(RenderError::MissingField("destination"))?,
            value: raw.value,
            data: raw.data.ok_or(RenderError::MissingField("data"))?,
            yes_count: raw.yes_count.ok_or(RenderError::MissingField("yesCount"))?,
            no_count: raw.no_count.ok_or(RenderError::MissingField("noCount"))?,
        })
    }
}
