use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Business-layer wrapper for a key fingerprint.
///
/// Fingerprints are derived by the remote validator from key material and are
/// never computed locally. The wrapper prevents mixing them up with contact
/// or workspace identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for KeyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for KeyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for KeyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_id_creation() {
        let id = KeyId::new("F1E2D3C4".to_string());
        assert_eq!(id.as_str(), "F1E2D3C4");
    }

    #[test]
    fn test_key_id_display_is_full() {
        let id = KeyId::from("A1B2C3D4E5F60718");
        assert_eq!(format!("{}", id), "A1B2C3D4E5F60718");
    }
}
