//! Wizard state machine.
//!
//! Owns the step position and the draft aggregate. Transitions are pure:
//! the single remote side effect (workspace creation) lives in the
//! application layer, which calls [`Wizard::build_submission`] and
//! [`Wizard::complete`] around it.

use crate::ids::KeyId;
use crate::security::SecretString;
use crate::workspace::draft::{AccessControlType, WorkspaceDraft};
use crate::workspace::step::WizardStep;
use crate::workspace::submission::{AccessControl, CreateWorkspaceRequest, Mnemonic};
use crate::workspace::validation::{validate_step, StepErrors, ValidationError};

/// The workspace-creation wizard.
///
/// 向导状态机：Params → Security → Permissions → Review → Success。
#[derive(Debug, Default)]
pub struct Wizard {
    step: WizardStep,
    draft: WorkspaceDraft,
    mnemonic: Option<Mnemonic>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &WorkspaceDraft {
        &self.draft
    }

    /// Mutable access for the currently mounted step. Steps are never
    /// mounted concurrently, which keeps the draft single-writer.
    pub fn draft_mut(&mut self) -> &mut WorkspaceDraft {
        &mut self.draft
    }

    /// Mnemonic of the created workspace; present only in `Success`.
    pub fn mnemonic(&self) -> Option<&Mnemonic> {
        self.mnemonic.as_ref()
    }

    /// Validate the current step and move forward on success.
    ///
    /// On failure no transition occurs and the failing fields are returned
    /// for inline display; the draft is left untouched. `Review` and
    /// `Success` have no `advance()` successor, so the call is a no-op
    /// there.
    pub fn advance(&mut self) -> Result<WizardStep, StepErrors> {
        validate_step(self.step, &self.draft)?;

        if let Some(next) = self.step.next() {
            self.step = next;
        }

        Ok(self.step)
    }

    /// Move one step back without validating or discarding committed data.
    /// No-op at `Params` and at the terminal `Success` step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }

        self.step
    }

    /// Assemble the single atomic creation request from the draft.
    ///
    /// Contacts-gated workspaces must permit at least one contact; this is
    /// the submission-adjacent check the security step deliberately skips.
    /// Inactive permission payloads are omitted regardless of any stale
    /// local values.
    pub fn build_submission(
        &self,
        base_owner_key_id: KeyId,
    ) -> Result<CreateWorkspaceRequest, StepErrors> {
        let draft = &self.draft;

        let access_control = match draft.access_type {
            AccessControlType::Password => AccessControl::Password {
                password: SecretString::new(draft.password.expose().to_owned()),
            },
            AccessControlType::SpecificContacts => {
                if draft.contacts.is_empty() {
                    return Err(StepErrors(vec![ValidationError::ContactsRequired]));
                }
                AccessControl::Contacts {
                    contacts: draft.contacts.iter().cloned().collect(),
                }
            }
        };

        let additional_owner_public_keys = if draft.permissions.additional_owners.active {
            draft.permissions.additional_owners.contacts.public_keys()
        } else {
            Vec::new()
        };

        Ok(CreateWorkspaceRequest {
            name: draft.name.clone(),
            workspace_type: draft.workspace_type,
            access_control,
            base_owner_key_id,
            additional_owner_public_keys,
        })
    }

    /// Record the returned mnemonic and enter the terminal `Success` step.
    /// Only meaningful from `Review`; ignored elsewhere so a stale
    /// completion cannot corrupt the flow.
    pub fn complete(&mut self, mnemonic: Mnemonic) {
        if self.step == WizardStep::Review {
            self.mnemonic = Some(mnemonic);
            self.step = WizardStep::Success;
        }
    }
}
