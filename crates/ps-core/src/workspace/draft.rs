use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contact::ContactSelection;
use crate::security::SecretString;

/// Direction of file exchange for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceType {
    SendOnly,
    ReceiveOnly,
    SendReceive,
}

impl WorkspaceType {
    pub fn label(self) -> &'static str {
        match self {
            Self::SendOnly => "Send only",
            Self::ReceiveOnly => "Receive only",
            Self::SendReceive => "Send & Receive",
        }
    }
}

/// Which access-control mechanism gates workspace membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessControlType {
    SpecificContacts,
    Password,
}

impl AccessControlType {
    pub fn label(self) -> &'static str {
        match self {
            Self::SpecificContacts => "Specific contacts",
            Self::Password => "Password",
        }
    }
}

/// Automatic close of the workspace at a chosen instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoClose {
    pub active: bool,
    pub date: Option<DateTime<Utc>>,
}

/// Upper bound on the number of peers that may join.
///
/// The limit is kept as the raw text entry; it is validated (digits only,
/// 1..=100) at the permissions step and parsed when the submission payload
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerLimit {
    pub active: bool,
    pub limit: String,
}

/// Contacts that control the workspace besides the base owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalOwners {
    pub active: bool,
    pub contacts: ContactSelection,
}

/// Independently toggled workspace permissions.
///
/// A sub-feature's payload is meaningful only while it is active. Toggling a
/// feature off deliberately leaves the payload in place so toggling it back
/// on restores the previous entry; inactive payloads are never submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub auto_close: AutoClose,
    pub peer_limit: PeerLimit,
    pub additional_owners: AdditionalOwners,
}

/// The wizard's draft aggregate.
///
/// 向导草稿：唯一所有者是向导本身，只有当前步骤可以修改。
///
/// Both access-control payloads are retained while the wizard is open:
/// switching the access-control type back and forth does not discard the
/// other variant's in-progress data. Only the active variant is validated
/// and submitted.
#[derive(Debug)]
pub struct WorkspaceDraft {
    pub name: String,
    pub workspace_type: WorkspaceType,

    pub access_type: AccessControlType,
    pub password: SecretString,
    pub password_confirm: SecretString,
    pub contacts: ContactSelection,

    pub permissions: Permissions,
}

impl Default for WorkspaceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            workspace_type: WorkspaceType::SendOnly,
            access_type: AccessControlType::SpecificContacts,
            password: SecretString::default(),
            password_confirm: SecretString::default(),
            contacts: ContactSelection::new(),
            permissions: Permissions::default(),
        }
    }
}

impl WorkspaceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_password(&mut self, password: String, confirm: String) {
        self.password = SecretString::new(password);
        self.password_confirm = SecretString::new(confirm);
    }
}
