use crate::ids::KeyId;
use crate::ports::errors::RemoteServiceError;
use crate::security::SecretString;

/// Parameters for creating (or re-keying) a local identity.
#[derive(Debug)]
pub struct CreateIdentityRequest {
    pub name: String,
    pub picture: String,
    pub private_key: SecretString,
}

/// Identity record as stored by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id: String,
    pub name: String,
    pub public_key_id: KeyId,
    pub is_primary: bool,
}

/// Identity management against the local daemon.
#[async_trait::async_trait]
pub trait IdentityPort: Send + Sync {
    async fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> Result<IdentityRecord, RemoteServiceError>;
}
