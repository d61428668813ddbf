use crate::ids::KeyId;
use crate::ports::errors::RemoteServiceError;
use crate::security::SecretString;

/// Supported RSA key strengths for remote generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Rsa2048,
    Rsa4096,
}

impl KeySize {
    pub fn bits(self) -> u32 {
        match self {
            Self::Rsa2048 => 2048,
            Self::Rsa4096 => 4096,
        }
    }
}

impl Default for KeySize {
    fn default() -> Self {
        Self::Rsa2048
    }
}

/// Result of validating private key text: the validator derives the
/// matching public half alongside the fingerprint.
#[derive(Debug)]
pub struct PrivateKeyValidation {
    pub key_id: KeyId,
    pub public_key: String,
}

/// Parameters for remote key-pair generation.
#[derive(Debug, Clone)]
pub struct GenerateKeyPairRequest {
    pub name: String,
    pub email: String,
    pub key_size: KeySize,
}

/// A freshly generated pair. The daemon returns the private half and the
/// fingerprint; the public half stays server-side until the pair is used.
#[derive(Debug)]
pub struct GeneratedKeyPair {
    pub key_id: KeyId,
    pub private_key: SecretString,
}

/// Remote key validation and generation.
///
/// Fingerprints are only ever derived here, never computed by the client.
#[async_trait::async_trait]
pub trait CryptoPort: Send + Sync {
    async fn validate_public_key(&self, public_key: &str) -> Result<KeyId, RemoteServiceError>;

    async fn validate_private_key(
        &self,
        private_key: &str,
    ) -> Result<PrivateKeyValidation, RemoteServiceError>;

    async fn generate_key_pair(
        &self,
        request: GenerateKeyPairRequest,
    ) -> Result<GeneratedKeyPair, RemoteServiceError>;
}
