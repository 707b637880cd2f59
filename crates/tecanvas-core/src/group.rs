//! Group identifiers shared by both sides of a connection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a TE group or a Canvas group.
///
/// Canvas ids arrive from the backend as integers or strings; both are kept in
/// their literal string form so the rest of the front never cares which.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for GroupId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Category of TE group, used to filter the TE group listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupType(String);

impl GroupType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Builds a type from a submitted form value. Empty means "no type".
    pub fn from_form_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self::new(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
