use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a construction.
///
/// Constructions are shared by many surfaces and are de-duplicated by this id
/// when listing the constructions of a model.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Blank strings are replaced by a random id.
impl From<String> for UID {
    fn from(value: String) -> Self {
        if value.trim().is_empty() {
            Self::new()
        } else {
            Self(value)
        }
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
