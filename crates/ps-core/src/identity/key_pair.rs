use crate::ids::KeyId;
use crate::security::SecretString;

/// A validated key pair record.
///
/// 密钥对记录：指纹一定存在，公钥/私钥按来源可能缺失。
///
/// The fingerprint always comes from the remote validator. Which halves are
/// present depends on how the record was produced:
/// - public-key validation carries only the public half,
/// - private-key validation carries both halves,
/// - remote generation carries the private half and the fingerprint.
#[derive(Debug)]
pub struct KeyPair {
    pub key_id: KeyId,
    pub public_key: Option<String>,
    pub private_key: Option<SecretString>,
}

impl KeyPair {
    /// Record produced by validating public key text.
    pub fn from_public(key_id: KeyId, public_key: String) -> Self {
        Self {
            key_id,
            public_key: Some(public_key),
            private_key: None,
        }
    }

    /// Record produced by validating private key text. The validator derives
    /// and returns the matching public half.
    pub fn from_private(key_id: KeyId, public_key: String, private_key: SecretString) -> Self {
        Self {
            key_id,
            public_key: Some(public_key),
            private_key: Some(private_key),
        }
    }

    /// Record produced by remote generation.
    pub fn generated(key_id: KeyId, private_key: SecretString) -> Self {
        Self {
            key_id,
            public_key: None,
            private_key: Some(private_key),
        }
    }

    pub fn has_private_half(&self) -> bool {
        self.private_key.is_some()
    }

    /// Private key text for read-only display after generation.
    pub fn private_key_pem(&self) -> Option<&str> {
        self.private_key.as_ref().map(|k| k.expose())
    }
}
