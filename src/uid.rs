use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored calculation.
///
/// Serialized transparently as its string form so stored records stay
/// readable. New identifiers are random v4 UUIDs; any string read back
/// from a store is accepted as-is.
#[derive(Eq, PartialEq, Hash, Debug, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UID(String);

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uids_are_unique_uuids() {
        let a = UID::new();
        let b = UID::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_serializes_as_plain_string() -> anyhow::Result<()> {
        let uid = UID::from("calc-1");
        assert_eq!(serde_json::to_string(&uid)?, "\"calc-1\"");
        let back: UID = serde_json::from_str("\"calc-1\"")?;
        assert_eq!(back, uid);
        assert_eq!(format!("{uid}"), "calc-1");
        Ok(())
    }
}
