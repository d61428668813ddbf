//! Port implementations over the daemon's REST API.

use tracing::debug;

use ps_core::ports::{
    ContactDirectoryPort, CreateIdentityRequest, CryptoPort, GenerateKeyPairRequest,
    GeneratedKeyPair, IdentityPort, IdentityRecord, PrivateKeyValidation, RemoteServiceError,
    WorkspacePort,
};
use ps_core::{Contact, CreateWorkspaceRequest, KeyId, Mnemonic, SecretString};

use crate::rest::client::RestClient;
use crate::rest::dto;

/// All four remote-service ports, implemented against one daemon.
pub struct DaemonRestAdapter {
    client: RestClient,
}

impl DaemonRestAdapter {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl CryptoPort for DaemonRestAdapter {
    async fn validate_public_key(&self, public_key: &str) -> Result<KeyId, RemoteServiceError> {
        let response: dto::ValidatePublicKeyResponse = self
            .client
            .post_json(
                "crypto/validate-public-key",
                &dto::ValidatePublicKeyRequest { public_key },
            )
            .await?;

        Ok(KeyId::new(response.public_key_id))
    }

    async fn validate_private_key(
        &self,
        private_key: &str,
    ) -> Result<PrivateKeyValidation, RemoteServiceError> {
        let response: dto::ValidatePrivateKeyResponse = self
            .client
            .post_json(
                "crypto/validate-private-key",
                &dto::ValidatePrivateKeyRequest { private_key },
            )
            .await?;

        Ok(PrivateKeyValidation {
            key_id: KeyId::new(response.public_key_id),
            public_key: response.public_key,
        })
    }

    async fn generate_key_pair(
        &self,
        request: GenerateKeyPairRequest,
    ) -> Result<GeneratedKeyPair, RemoteServiceError> {
        let response: dto::GenerateKeyPairResponse = self
            .client
            .post_json(
                "crypto/generate-key-pair",
                &dto::GenerateKeyPairRequest {
                    name: &request.name,
                    email: &request.email,
                    key_size: request.key_size.bits(),
                },
            )
            .await?;

        Ok(GeneratedKeyPair {
            key_id: KeyId::new(response.public_key_id),
            private_key: SecretString::new(response.private_key),
        })
    }
}

#[async_trait::async_trait]
impl ContactDirectoryPort for DaemonRestAdapter {
    async fn list_all(&self) -> Result<Vec<Contact>, RemoteServiceError> {
        // page/limit of -1 ask the daemon for the whole directory at once.
        let response: dto::ContactsResponse =
            self.client.get_json("contacts?page=-1&limit=-1").await?;

        debug!(count = response.count, "fetched contact directory");
        Ok(response
            .data
            .into_iter()
            .map(dto::ContactDto::into_domain)
            .collect())
    }
}

#[async_trait::async_trait]
impl WorkspacePort for DaemonRestAdapter {
    async fn create_workspace(
        &self,
        request: CreateWorkspaceRequest,
    ) -> Result<Mnemonic, RemoteServiceError> {
        let response: dto::NewWorkspaceResponse = self
            .client
            .post_json("workspaces", &dto::NewWorkspaceRequest::from_domain(request))
            .await?;

        Ok(Mnemonic::new(response.mnemonic))
    }
}

#[async_trait::async_trait]
impl IdentityPort for DaemonRestAdapter {
    async fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> Result<IdentityRecord, RemoteServiceError> {
        let response: dto::IdentityResponse = self
            .client
            .post_json(
                "identities",
                &dto::NewIdentityRequest {
                    name: request.name,
                    picture: request.picture,
                    private_key: request.private_key.into_inner(),
                },
            )
            .await?;

        Ok(IdentityRecord {
            id: response.id,
            name: response.name,
            public_key_id: KeyId::new(response.public_key_id),
            is_primary: response.is_primary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::workspace::AccessControl;
    use ps_core::WorkspaceType;
    use serde_json::json;

    fn adapter_for(server: &mockito::ServerGuard) -> DaemonRestAdapter {
        DaemonRestAdapter::new(RestClient::with_base_url(server.url()).unwrap())
    }

    #[tokio::test]
    async fn validate_public_key_returns_the_fingerprint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/crypto/validate-public-key")
            .match_body(mockito::Matcher::Json(json!({ "publicKey": "PEM" })))
            .with_status(200)
            .with_body(r#"{"publicKeyID":"AB12"}"#)
            .create_async()
            .await;

        let key_id = adapter_for(&server).validate_public_key("PEM").await.unwrap();

        assert_eq!(key_id, KeyId::from("AB12"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn invalid_key_surfaces_the_daemon_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/crypto/validate-public-key")
            .with_status(400)
            .with_body("Invalid public key\n")
            .create_async()
            .await;

        let error = adapter_for(&server)
            .validate_public_key("garbage")
            .await
            .unwrap_err();

        match error {
            RemoteServiceError::Rejected(message) => assert_eq!(message, "Invalid public key"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn validate_private_key_returns_both_halves() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/crypto/validate-private-key")
            .with_status(200)
            .with_body(r#"{"publicKeyID":"AB12","publicKey":"DERIVED"}"#)
            .create_async()
            .await;

        let validation = adapter_for(&server)
            .validate_private_key("PRIVATE PEM")
            .await
            .unwrap();

        assert_eq!(validation.key_id, KeyId::from("AB12"));
        assert_eq!(validation.public_key, "DERIVED");
    }

    #[tokio::test]
    async fn generate_key_pair_sends_the_bit_size() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/crypto/generate-key-pair")
            .match_body(mockito::Matcher::Json(json!({
                "name": "Ann",
                "email": "ann@example.com",
                "keySize": 4096
            })))
            .with_status(200)
            .with_body(r#"{"privateKey":"GENERATED","publicKeyID":"GEN1"}"#)
            .create_async()
            .await;

        let generated = adapter_for(&server)
            .generate_key_pair(GenerateKeyPairRequest {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                key_size: ps_core::ports::KeySize::Rsa4096,
            })
            .await
            .unwrap();

        assert_eq!(generated.key_id, KeyId::from("GEN1"));
        assert_eq!(generated.private_key.expose(), "GENERATED");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn list_all_requests_the_unpaginated_directory() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/contacts?page=-1&limit=-1")
            .with_status(200)
            .with_body(
                r#"{
                    "data": [
                        {"id":"c1","name":"Ann","email":"","dateAdded":"","publicKeyID":"AA11","publicKey":"PEM"}
                    ],
                    "count": 1
                }"#,
            )
            .create_async()
            .await;

        let contacts = adapter_for(&server).list_all().await.unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Ann");
        assert_eq!(contacts[0].public_key_id, KeyId::from("AA11"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_workspace_posts_the_assembled_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces")
            .match_body(mockito::Matcher::Json(json!({
                "workspaceName": "Team A",
                "workspaceType": "Send only",
                "workspaceAccessControlType": "Password",
                "baseWorkspaceOwnerKeyID": "OWNER",
                "workspaceAccessControl": { "password": "pw" },
                "workspaceAdditionalOwnerPublicKeys": []
            })))
            .with_status(200)
            .with_body(r#"{"mnemonic":"habit taste push"}"#)
            .create_async()
            .await;

        let mnemonic = adapter_for(&server)
            .create_workspace(CreateWorkspaceRequest {
                name: "Team A".to_string(),
                workspace_type: WorkspaceType::SendOnly,
                access_control: AccessControl::Password {
                    password: SecretString::new("pw".to_string()),
                },
                base_owner_key_id: KeyId::from("OWNER"),
                additional_owner_public_keys: vec![],
            })
            .await
            .unwrap();

        assert_eq!(mnemonic.as_str(), "habit taste push");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_identity_maps_the_record() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/identities")
            .match_body(mockito::Matcher::Json(json!({
                "name": "Ann",
                "picture": "",
                "privateKey": "PRIVATE PEM"
            })))
            .with_status(200)
            .with_body(r#"{"id":"id-1","name":"Ann","publicKeyID":"AB12","isPrimary":true}"#)
            .create_async()
            .await;

        let record = adapter_for(&server)
            .create_identity(CreateIdentityRequest {
                name: "Ann".to_string(),
                picture: String::new(),
                private_key: SecretString::new("PRIVATE PEM".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(record.id, "id-1");
        assert!(record.is_primary);
    }

    #[tokio::test]
    async fn unreachable_daemon_is_a_transport_error() {
        // Nothing listens on this port.
        let client = RestClient::with_base_url("http://127.0.0.1:9".to_string()).unwrap();
        let adapter = DaemonRestAdapter::new(client);

        let error = adapter.validate_public_key("PEM").await.unwrap_err();
        assert!(matches!(error, RemoteServiceError::Transport(_)));
    }
}
