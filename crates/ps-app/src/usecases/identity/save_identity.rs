//! Saving a local identity.
//!
//! The identity form is a single-step sibling of the wizard: a name plus
//! exactly one key pair acquired through the engine and its overwrite
//! guard. The pair must carry its private half, since the identity signs
//! as the local user.

use std::sync::Arc;

use tracing::info;

use ps_core::ports::{CreateIdentityRequest, IdentityPort, IdentityRecord, RemoteServiceError};
use ps_core::SecretString;

use crate::usecases::key_acquisition::KeyAcquisitionContext;

/// Errors produced when saving an identity.
#[derive(Debug, thiserror::Error)]
pub enum SaveIdentityError {
    #[error("Name is required")]
    NameRequired,

    #[error("A key pair is required")]
    KeyPairRequired,

    #[error("The attached key has no private half")]
    PrivateKeyRequired,

    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

/// Use case for creating a local identity from the acquisition form.
pub struct SaveIdentity {
    identities: Arc<dyn IdentityPort>,
}

impl SaveIdentity {
    pub fn new(identities: Arc<dyn IdentityPort>) -> Self {
        Self { identities }
    }

    /// Validate the form locally, then create the identity remotely.
    pub async fn execute(
        &self,
        name: &str,
        picture: &str,
        context: &KeyAcquisitionContext,
    ) -> Result<IdentityRecord, SaveIdentityError> {
        if name.trim().is_empty() {
            return Err(SaveIdentityError::NameRequired);
        }

        let private_key = context
            .with_slot(|slot| match slot.active() {
                None => Err(SaveIdentityError::KeyPairRequired),
                Some(pair) => pair
                    .private_key_pem()
                    .map(|pem| SecretString::new(pem.to_owned()))
                    .ok_or(SaveIdentityError::PrivateKeyRequired),
            })
            .await?;

        let record = self
            .identities
            .create_identity(CreateIdentityRequest {
                name: name.to_string(),
                picture: picture.to_string(),
                private_key,
            })
            .await?;

        info!(id = %record.id, "identity created");
        Ok(record)
    }
}
