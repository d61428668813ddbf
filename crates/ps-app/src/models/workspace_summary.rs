use chrono::{DateTime, Utc};
use serde::Serialize;

use ps_core::{AccessControlType, Wizard};

/// Access-control portion of the review/success summary. The password is
/// never projected, only the fact that one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AccessControlSummary {
    Password,
    Contacts { labels: Vec<String> },
}

/// Read-only projection of the wizard draft for the review and success
/// screens. Inactive permission payloads are not projected, mirroring what
/// would actually be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub name: String,
    pub workspace_type: &'static str,
    pub access_control_type: &'static str,
    pub access_control: AccessControlSummary,

    pub auto_close_date: Option<DateTime<Utc>>,
    pub peer_limit: Option<String>,
    pub additional_owners: Vec<String>,

    /// Present only on the success screen, for one-click copy.
    pub mnemonic: Option<String>,
}

impl WorkspaceSummary {
    pub fn project(wizard: &Wizard) -> Self {
        let draft = wizard.draft();
        let permissions = &draft.permissions;

        let access_control = match draft.access_type {
            AccessControlType::Password => AccessControlSummary::Password,
            AccessControlType::SpecificContacts => AccessControlSummary::Contacts {
                labels: draft.contacts.iter().map(|c| c.display_label()).collect(),
            },
        };

        Self {
            name: draft.name.clone(),
            workspace_type: draft.workspace_type.label(),
            access_control_type: draft.access_type.label(),
            access_control,
            auto_close_date: permissions
                .auto_close
                .active
                .then_some(permissions.auto_close.date)
                .flatten(),
            peer_limit: permissions
                .peer_limit
                .active
                .then(|| permissions.peer_limit.limit.clone()),
            additional_owners: if permissions.additional_owners.active {
                permissions
                    .additional_owners
                    .contacts
                    .iter()
                    .map(|c| c.display_label())
                    .collect()
            } else {
                Vec::new()
            },
            mnemonic: wizard.mnemonic().map(|m| m.as_str().to_string()),
        }
    }
}
