use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::contact::Contact;
use crate::ids::KeyId;
use crate::security::SecretString;
use crate::workspace::draft::WorkspaceType;

/// Human-readable workspace identifier returned by a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new(phrase: String) -> Self {
        Self(phrase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Mnemonic {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Access-control payload of a creation request.
///
/// Exactly one mechanism is submitted; the variant carries its own payload
/// so a request can never hold both a password and a contact list, or
/// neither.
#[derive(Debug)]
pub enum AccessControl {
    Password { password: SecretString },
    Contacts { contacts: Vec<Contact> },
}

impl AccessControl {
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Password { .. } => "Password",
            Self::Contacts { .. } => "Specific contacts",
        }
    }
}

/// The single atomic creation request assembled from a finished draft.
#[derive(Debug)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    pub workspace_type: WorkspaceType,
    pub access_control: AccessControl,
    pub base_owner_key_id: KeyId,

    /// Public keys of the additional owner contacts; empty when the
    /// additional-owners permission is inactive.
    pub additional_owner_public_keys: Vec<String>,
}
