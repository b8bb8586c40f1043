//! Resource classification shared by entries and errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of resource behind a registry entry.
///
/// Native `Release` implementors report `Generic`; the built-in adapters
/// report the foreign kind they wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[default]
    Generic,
    Connection,
    Statement,
    Cursor,
    Deferred,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Generic => "resource",
            ResourceKind::Connection => "connection",
            ResourceKind::Statement => "statement",
            ResourceKind::Cursor => "cursor",
            ResourceKind::Deferred => "deferred",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
