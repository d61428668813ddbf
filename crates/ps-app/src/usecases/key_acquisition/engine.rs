//! Key acquisition engine.
//!
//! Turns raw user input (a dropped file, pasted text, or generation
//! parameters) into a validated key pair and offers it to the guarded slot.
//! Rapid repeated validation calls are tolerated: responses commit only
//! while their request token is still the latest issued (last write wins).

use std::sync::Arc;

use tracing::{debug, info, warn};

use ps_core::ports::{CryptoPort, GenerateKeyPairRequest, KeySize, RemoteServiceError};
use ps_core::{KeyId, KeyOffer, KeyPair, SecretString};

use crate::usecases::key_acquisition::context::KeyAcquisitionContext;

/// Which key half the form expects from the user.
///
/// Contact records carry a public key; identities need the private half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Public,
    Private,
}

/// Outcome of one acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The candidate is now the active pair; no prompt was needed.
    Committed { key_id: KeyId },

    /// A pair is already active; the candidate is parked and the overwrite
    /// prompt should display `existing`.
    AwaitingConfirmation { existing: KeyId },

    /// A newer acquisition was started while this one was in flight; the
    /// response was discarded.
    Superseded,
}

/// Errors produced by the acquisition engine.
#[derive(Debug, thiserror::Error)]
pub enum KeyAcquisitionError {
    #[error("key file is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("key text is empty")]
    EmptyInput,

    #[error("a name is required to generate a key pair")]
    NameRequired,

    #[error("an email is required to generate a key pair")]
    EmailRequired,

    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

/// The acquisition engine for one form instance.
pub struct KeyAcquisitionEngine {
    crypto: Arc<dyn CryptoPort>,
    context: Arc<KeyAcquisitionContext>,
    expected: KeyContext,
}

impl KeyAcquisitionEngine {
    pub fn new(crypto: Arc<dyn CryptoPort>, expected: KeyContext) -> Self {
        Self {
            crypto,
            context: KeyAcquisitionContext::new().arc(),
            expected,
        }
    }

    pub fn with_context(
        crypto: Arc<dyn CryptoPort>,
        expected: KeyContext,
        context: Arc<KeyAcquisitionContext>,
    ) -> Self {
        Self {
            crypto,
            context,
            expected,
        }
    }

    pub fn context(&self) -> &Arc<KeyAcquisitionContext> {
        &self.context
    }

    /// Import key material from an uploaded file.
    pub async fn import_file(&self, bytes: &[u8]) -> Result<KeyOutcome, KeyAcquisitionError> {
        let text = std::str::from_utf8(bytes).map_err(|_| KeyAcquisitionError::InvalidEncoding)?;
        debug!(len = bytes.len(), "importing key file");

        self.validate_text(text).await
    }

    /// Re-validate the current contents of the paste-text box. Called on
    /// every input event; stale completions are discarded by token.
    pub async fn enter_text(&self, text: &str) -> Result<KeyOutcome, KeyAcquisitionError> {
        self.context.set_entry_buffer(text).await;

        self.validate_text(text).await
    }

    /// Request remote generation of a fresh pair.
    pub async fn generate(
        &self,
        name: &str,
        email: &str,
        key_size: KeySize,
    ) -> Result<KeyOutcome, KeyAcquisitionError> {
        if name.trim().is_empty() {
            return Err(KeyAcquisitionError::NameRequired);
        }
        if email.trim().is_empty() {
            return Err(KeyAcquisitionError::EmailRequired);
        }

        let token = self.context.next_token();
        info!(bits = key_size.bits(), "requesting key pair generation");

        let generated = self
            .crypto
            .generate_key_pair(GenerateKeyPairRequest {
                name: name.to_string(),
                email: email.to_string(),
                key_size,
            })
            .await;

        self.offer_result(
            token,
            generated.map(|g| KeyPair::generated(g.key_id, g.private_key)),
        )
        .await
    }

    /// User confirmed the overwrite prompt. Returns the new active
    /// fingerprint, `None` when the prompt had already been resolved.
    pub async fn confirm_overwrite(&self) -> Option<KeyId> {
        self.context.with_slot(|slot| slot.confirm_overwrite()).await
    }

    /// User declined the overwrite prompt; the candidate is dropped.
    pub async fn decline_overwrite(&self) {
        self.context.with_slot(|slot| slot.decline_overwrite()).await
    }

    /// Remove the active pair and clear the text-entry buffer; the user
    /// must re-acquire from scratch.
    pub async fn remove_active(&self) {
        self.context.reset().await
    }

    pub async fn active_key_id(&self) -> Option<KeyId> {
        self.context
            .with_slot(|slot| slot.active_key_id().cloned())
            .await
    }

    async fn validate_text(&self, text: &str) -> Result<KeyOutcome, KeyAcquisitionError> {
        let normalized = normalize_key_text(text);
        if normalized.is_empty() {
            return Err(KeyAcquisitionError::EmptyInput);
        }

        let token = self.context.next_token();

        let candidate = match self.expected {
            KeyContext::Public => self
                .crypto
                .validate_public_key(&normalized)
                .await
                .map(|key_id| KeyPair::from_public(key_id, normalized)),
            KeyContext::Private => self
                .crypto
                .validate_private_key(&normalized)
                .await
                .map(|validation| {
                    KeyPair::from_private(
                        validation.key_id,
                        validation.public_key,
                        SecretString::new(normalized),
                    )
                }),
        };

        self.offer_result(token, candidate).await
    }

    /// Offer the validated candidate to the slot, unless a newer request
    /// has been issued in the meantime. The freshness check happens under
    /// the slot lock so a response can never race the one that superseded
    /// it.
    async fn offer_result(
        &self,
        token: u64,
        candidate: Result<KeyPair, RemoteServiceError>,
    ) -> Result<KeyOutcome, KeyAcquisitionError> {
        self.context
            .with_slot(|slot| {
                if !self.context.is_latest(token) {
                    debug!(token, "discarding superseded validation response");
                    return Ok(KeyOutcome::Superseded);
                }

                match candidate {
                    Ok(pair) => Ok(match slot.offer(pair) {
                        KeyOffer::Committed { key_id } => {
                            info!(%key_id, "key pair committed");
                            KeyOutcome::Committed { key_id }
                        }
                        KeyOffer::AwaitingConfirmation { existing } => {
                            KeyOutcome::AwaitingConfirmation { existing }
                        }
                    }),
                    Err(error) => {
                        // The active pair stays untouched on failure.
                        warn!(%error, "key validation failed");
                        Err(error.into())
                    }
                }
            })
            .await
    }
}

fn normalize_key_text(text: &str) -> String {
    text.replace('\r', "").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    use ps_core::ports::{GeneratedKeyPair, PrivateKeyValidation};

    /// Scripted crypto port: pops the next queued response per operation.
    struct ScriptedCryptoPort {
        public_responses: StdMutex<Vec<Result<KeyId, RemoteServiceError>>>,
        private_responses: StdMutex<Vec<Result<PrivateKeyValidation, RemoteServiceError>>>,
        generate_responses: StdMutex<Vec<Result<GeneratedKeyPair, RemoteServiceError>>>,
    }

    impl ScriptedCryptoPort {
        fn new() -> Self {
            Self {
                public_responses: StdMutex::new(Vec::new()),
                private_responses: StdMutex::new(Vec::new()),
                generate_responses: StdMutex::new(Vec::new()),
            }
        }

        fn queue_public(self, response: Result<KeyId, RemoteServiceError>) -> Self {
            self.public_responses.lock().unwrap().insert(0, response);
            self
        }

        fn queue_private(
            self,
            response: Result<PrivateKeyValidation, RemoteServiceError>,
        ) -> Self {
            self.private_responses.lock().unwrap().insert(0, response);
            self
        }

        fn queue_generated(self, response: Result<GeneratedKeyPair, RemoteServiceError>) -> Self {
            self.generate_responses.lock().unwrap().insert(0, response);
            self
        }
    }

    #[async_trait::async_trait]
    impl CryptoPort for ScriptedCryptoPort {
        async fn validate_public_key(
            &self,
            _public_key: &str,
        ) -> Result<KeyId, RemoteServiceError> {
            self.public_responses
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected validate_public_key call")
        }

        async fn validate_private_key(
            &self,
            _private_key: &str,
        ) -> Result<PrivateKeyValidation, RemoteServiceError> {
            self.private_responses
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected validate_private_key call")
        }

        async fn generate_key_pair(
            &self,
            _request: GenerateKeyPairRequest,
        ) -> Result<GeneratedKeyPair, RemoteServiceError> {
            self.generate_responses
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected generate_key_pair call")
        }
    }

    fn engine_with(port: ScriptedCryptoPort, expected: KeyContext) -> KeyAcquisitionEngine {
        KeyAcquisitionEngine::new(Arc::new(port), expected)
    }

    #[tokio::test]
    async fn first_key_commits_without_prompt() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_public(Ok(KeyId::from("K1"))),
            KeyContext::Public,
        );

        let outcome = engine.enter_text("PUBLIC PEM").await.unwrap();

        assert_eq!(
            outcome,
            KeyOutcome::Committed {
                key_id: KeyId::from("K1")
            }
        );
        assert_eq!(engine.active_key_id().await, Some(KeyId::from("K1")));
    }

    #[tokio::test]
    async fn second_key_requires_confirmation_showing_existing_fingerprint() {
        let engine = engine_with(
            ScriptedCryptoPort::new()
                .queue_public(Ok(KeyId::from("K1")))
                .queue_public(Ok(KeyId::from("K2"))),
            KeyContext::Public,
        );

        engine.enter_text("FIRST").await.unwrap();
        let outcome = engine.enter_text("SECOND").await.unwrap();

        assert_eq!(
            outcome,
            KeyOutcome::AwaitingConfirmation {
                existing: KeyId::from("K1")
            }
        );

        // Active pair unchanged until the user decides.
        assert_eq!(engine.active_key_id().await, Some(KeyId::from("K1")));
    }

    #[tokio::test]
    async fn confirm_then_decline_round_trip() {
        let engine = engine_with(
            ScriptedCryptoPort::new()
                .queue_public(Ok(KeyId::from("K1")))
                .queue_public(Ok(KeyId::from("K2")))
                .queue_public(Ok(KeyId::from("K3"))),
            KeyContext::Public,
        );

        engine.enter_text("FIRST").await.unwrap();

        engine.enter_text("SECOND").await.unwrap();
        assert_eq!(engine.confirm_overwrite().await, Some(KeyId::from("K2")));
        assert_eq!(engine.active_key_id().await, Some(KeyId::from("K2")));

        engine.enter_text("THIRD").await.unwrap();
        engine.decline_overwrite().await;
        assert_eq!(engine.active_key_id().await, Some(KeyId::from("K2")));
    }

    #[tokio::test]
    async fn validation_failure_leaves_active_pair_untouched() {
        let engine = engine_with(
            ScriptedCryptoPort::new()
                .queue_public(Ok(KeyId::from("K1")))
                .queue_public(Err(RemoteServiceError::Rejected(
                    "Invalid public key".to_string(),
                ))),
            KeyContext::Public,
        );

        engine.enter_text("GOOD").await.unwrap();
        let error = engine.enter_text("BAD").await.unwrap_err();

        assert!(matches!(error, KeyAcquisitionError::Remote(_)));
        assert_eq!(engine.active_key_id().await, Some(KeyId::from("K1")));
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_public(Ok(KeyId::from("OLD"))),
            KeyContext::Public,
        );

        // A newer request was issued while this one was "in flight".
        let stale_token = engine.context().next_token();
        let _newer_token = engine.context().next_token();

        let outcome = engine
            .offer_result(
                stale_token,
                Ok(KeyPair::from_public(KeyId::from("OLD"), "PEM".to_string())),
            )
            .await
            .unwrap();

        assert_eq!(outcome, KeyOutcome::Superseded);
        assert_eq!(engine.active_key_id().await, None);
    }

    #[tokio::test]
    async fn private_context_keeps_both_halves() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_private(Ok(PrivateKeyValidation {
                key_id: KeyId::from("K1"),
                public_key: "DERIVED PUBLIC".to_string(),
            })),
            KeyContext::Private,
        );

        engine.enter_text("PRIVATE PEM").await.unwrap();

        engine
            .context()
            .with_slot(|slot| {
                let active = slot.active().expect("active pair");
                assert_eq!(active.public_key.as_deref(), Some("DERIVED PUBLIC"));
                assert_eq!(active.private_key_pem(), Some("PRIVATE PEM"));
            })
            .await;
    }

    #[tokio::test]
    async fn import_normalizes_line_endings() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_public(Ok(KeyId::from("K1"))),
            KeyContext::Public,
        );

        let outcome = engine
            .import_file(b"-----BEGIN-----\r\nAAAA\r\n-----END-----\r\n")
            .await
            .unwrap();

        assert!(matches!(outcome, KeyOutcome::Committed { .. }));
    }

    #[tokio::test]
    async fn import_rejects_binary_files() {
        let engine = engine_with(ScriptedCryptoPort::new(), KeyContext::Public);

        let error = engine.import_file(&[0xff, 0xfe, 0x00]).await.unwrap_err();
        assert!(matches!(error, KeyAcquisitionError::InvalidEncoding));
    }

    #[tokio::test]
    async fn empty_text_is_rejected_locally() {
        let engine = engine_with(ScriptedCryptoPort::new(), KeyContext::Public);

        let error = engine.enter_text("   \n").await.unwrap_err();
        assert!(matches!(error, KeyAcquisitionError::EmptyInput));
    }

    #[tokio::test]
    async fn generate_requires_name_and_email() {
        let engine = engine_with(ScriptedCryptoPort::new(), KeyContext::Private);

        assert!(matches!(
            engine.generate("", "a@b.c", KeySize::Rsa2048).await,
            Err(KeyAcquisitionError::NameRequired)
        ));
        assert!(matches!(
            engine.generate("Ann", "", KeySize::Rsa2048).await,
            Err(KeyAcquisitionError::EmailRequired)
        ));
    }

    #[tokio::test]
    async fn generate_commits_private_half_for_display() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_generated(Ok(GeneratedKeyPair {
                key_id: KeyId::from("GEN1"),
                private_key: SecretString::new("GENERATED PEM".to_string()),
            })),
            KeyContext::Private,
        );

        let outcome = engine
            .generate("Ann", "ann@example.com", KeySize::Rsa4096)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            KeyOutcome::Committed {
                key_id: KeyId::from("GEN1")
            }
        );
        engine
            .context()
            .with_slot(|slot| {
                assert_eq!(
                    slot.active().unwrap().private_key_pem(),
                    Some("GENERATED PEM")
                );
            })
            .await;
    }

    #[tokio::test]
    async fn remove_active_clears_slot_and_entry_buffer() {
        let engine = engine_with(
            ScriptedCryptoPort::new().queue_public(Ok(KeyId::from("K1"))),
            KeyContext::Public,
        );

        engine.enter_text("SOME KEY").await.unwrap();
        engine.remove_active().await;

        assert_eq!(engine.active_key_id().await, None);
        assert!(engine.context().entry_buffer().await.is_empty());
    }
}
