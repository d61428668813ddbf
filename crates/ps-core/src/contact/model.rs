use serde::{Deserialize, Serialize};

use crate::ids::KeyId;

/// A known contact from the local directory.
///
/// 联系人：对方的公钥记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub public_key_id: KeyId,
    pub public_key: String,
}

impl Contact {
    /// Case-insensitive substring match against the contact name OR the key
    /// fingerprint. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query)
            || self.public_key_id.as_str().to_lowercase().contains(&query)
    }

    /// Display label used by pickers and review summaries.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.public_key_id)
    }
}
