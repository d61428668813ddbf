//! Wire DTOs for the daemon's REST API.
//!
//! Field names match the daemon's JSON tags exactly; note the upper-case
//! `ID` suffixes, which serde's camelCase renaming would get wrong.

use serde::{Deserialize, Serialize};

use ps_core::workspace::AccessControl;
use ps_core::{Contact, CreateWorkspaceRequest, KeyId};

#[derive(Debug, Serialize)]
pub struct ValidatePublicKeyRequest<'a> {
    #[serde(rename = "publicKey")]
    pub public_key: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ValidatePublicKeyResponse {
    #[serde(rename = "publicKeyID")]
    pub public_key_id: String,
}

#[derive(Debug, Serialize)]
pub struct ValidatePrivateKeyRequest<'a> {
    #[serde(rename = "privateKey")]
    pub private_key: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ValidatePrivateKeyResponse {
    #[serde(rename = "publicKeyID")]
    pub public_key_id: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateKeyPairRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(rename = "keySize")]
    pub key_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateKeyPairResponse {
    #[serde(rename = "privateKey")]
    pub private_key: String,
    #[serde(rename = "publicKeyID")]
    pub public_key_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "dateAdded", default)]
    pub date_added: String,
    #[serde(rename = "publicKeyID")]
    pub public_key_id: String,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
}

impl ContactDto {
    pub fn into_domain(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            public_key_id: KeyId::new(self.public_key_id),
            public_key: self.public_key,
        }
    }

    pub fn from_domain(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            date_added: String::new(),
            public_key_id: contact.public_key_id.as_str().to_string(),
            public_key: contact.public_key.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactsResponse {
    pub data: Vec<ContactDto>,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct NewWorkspaceAccessControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactDto>>,
}

#[derive(Debug, Serialize)]
pub struct NewWorkspaceRequest {
    #[serde(rename = "workspaceName")]
    pub workspace_name: String,
    #[serde(rename = "workspaceType")]
    pub workspace_type: &'static str,
    #[serde(rename = "workspaceAccessControlType")]
    pub workspace_access_control_type: &'static str,
    #[serde(rename = "baseWorkspaceOwnerKeyID")]
    pub base_workspace_owner_key_id: String,
    #[serde(rename = "workspaceAccessControl")]
    pub workspace_access_control: NewWorkspaceAccessControl,
    #[serde(rename = "workspaceAdditionalOwnerPublicKeys")]
    pub workspace_additional_owner_public_keys: Vec<String>,
}

impl NewWorkspaceRequest {
    pub fn from_domain(request: CreateWorkspaceRequest) -> Self {
        let access_control_type = request.access_control.type_label();

        let workspace_access_control = match request.access_control {
            AccessControl::Password { password } => NewWorkspaceAccessControl {
                password: Some(password.into_inner()),
                contacts: None,
            },
            AccessControl::Contacts { contacts } => NewWorkspaceAccessControl {
                password: None,
                contacts: Some(contacts.iter().map(ContactDto::from_domain).collect()),
            },
        };

        Self {
            workspace_name: request.name,
            workspace_type: request.workspace_type.label(),
            workspace_access_control_type: access_control_type,
            base_workspace_owner_key_id: request.base_owner_key_id.into_inner(),
            workspace_access_control,
            workspace_additional_owner_public_keys: request.additional_owner_public_keys,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewWorkspaceResponse {
    pub mnemonic: String,
}

#[derive(Debug, Serialize)]
pub struct NewIdentityRequest {
    pub name: String,
    pub picture: String,
    #[serde(rename = "privateKey")]
    pub private_key: String,
}

#[derive(Debug, Deserialize)]
pub struct IdentityResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "publicKeyID")]
    pub public_key_id: String,
    #[serde(rename = "isPrimary", default)]
    pub is_primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::{SecretString, WorkspaceType};

    #[test]
    fn workspace_request_serializes_password_variant() {
        let request = NewWorkspaceRequest {
            workspace_name: "Team A".to_string(),
            workspace_type: WorkspaceType::SendReceive.label(),
            workspace_access_control_type: "Password",
            base_workspace_owner_key_id: "OWNER".to_string(),
            workspace_access_control: NewWorkspaceAccessControl {
                password: Some("pw".to_string()),
                contacts: None,
            },
            workspace_additional_owner_public_keys: vec![],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["workspaceName"], "Team A");
        assert_eq!(json["workspaceType"], "Send & Receive");
        assert_eq!(json["workspaceAccessControl"]["password"], "pw");
        assert!(json["workspaceAccessControl"].get("contacts").is_none());
    }

    #[test]
    fn from_domain_maps_the_contacts_variant() {
        let contact = Contact {
            id: "c1".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            public_key_id: KeyId::from("AA11"),
            public_key: "PEM".to_string(),
        };

        let request = NewWorkspaceRequest::from_domain(CreateWorkspaceRequest {
            name: "Team A".to_string(),
            workspace_type: WorkspaceType::SendOnly,
            access_control: AccessControl::Contacts {
                contacts: vec![contact],
            },
            base_owner_key_id: KeyId::from("OWNER"),
            additional_owner_public_keys: vec!["PEM-2".to_string()],
        });

        assert_eq!(request.workspace_access_control_type, "Specific contacts");
        let contacts = request.workspace_access_control.contacts.unwrap();
        assert_eq!(contacts[0].public_key_id, "AA11");
        assert_eq!(
            request.workspace_additional_owner_public_keys,
            vec!["PEM-2"]
        );
    }

    #[test]
    fn from_domain_moves_the_password_out_of_the_secret() {
        let request = NewWorkspaceRequest::from_domain(CreateWorkspaceRequest {
            name: "Team A".to_string(),
            workspace_type: WorkspaceType::SendOnly,
            access_control: AccessControl::Password {
                password: SecretString::new("pw".to_string()),
            },
            base_owner_key_id: KeyId::from("OWNER"),
            additional_owner_public_keys: vec![],
        });

        assert_eq!(request.workspace_access_control.password.as_deref(), Some("pw"));
    }

    #[test]
    fn contact_dto_round_trips_to_domain() {
        let dto: ContactDto = serde_json::from_str(
            r#"{
                "id": "c1",
                "name": "Ann",
                "email": "ann@example.com",
                "dateAdded": "2021-06-01",
                "publicKeyID": "AA11",
                "publicKey": "PEM"
            }"#,
        )
        .unwrap();

        let contact = dto.into_domain();
        assert_eq!(contact.public_key_id, KeyId::from("AA11"));
        assert_eq!(contact.public_key, "PEM");
    }
}
