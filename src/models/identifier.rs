//! Card identifiers and the control ids derived from them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Opaque token scoping one card's control ids.
///
/// Restricted to `[A-Za-z0-9_:.-]` so it can sit inside an `id` attribute
/// and a CSS/`getElementById` lookup without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Result<Self, RenderError> {
        let id = id.into();
        if id.is_empty() || !id.chars().all(is_id_char) {
            return Err(RenderError::InvalidIdentifier(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ids for the yes / no / remove controls of this card
    pub fn control_ids(&self) -> ControlIds {
        ControlIds {
            yes: format!("yes-{}", self.0),
            no: format!("no-{}", self.0),
            remove: format!("remove-{}", self.0),
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl TryFrom<&str> for Identifier {
    type Error = RenderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element ids of the three vote-action controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIds {
    pub yes: String,
    pub no: String,
    pub remove: String,
}
