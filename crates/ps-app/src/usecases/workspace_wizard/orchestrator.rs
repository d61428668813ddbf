//! Wizard orchestrator.
//!
//! Drives the pure wizard state machine and owns its single remote side
//! effect: the atomic workspace-creation call issued from the review step.

use std::sync::Arc;

use tracing::{info, warn};

use ps_core::ports::{RemoteServiceError, WorkspacePort};
use ps_core::workspace::StepErrors;
use ps_core::{KeyId, Mnemonic, WizardStep, WorkspaceDraft};

use crate::models::WorkspaceSummary;
use crate::usecases::workspace_wizard::context::WizardContext;

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The current step's fields are invalid; shown inline, never as a
    /// global notification.
    #[error("{0}")]
    Validation(#[from] StepErrors),

    #[error("submission is only available from the review step")]
    NotAtReview,

    /// The creation call failed; the wizard stays on review with the draft
    /// intact so the user can retry.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

/// Orchestrator for one wizard instance.
///
/// The owner key fingerprint is injected at construction: the wizard itself
/// never looks up ambient session state.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    workspaces: Arc<dyn WorkspacePort>,
    owner_key_id: KeyId,
}

impl WizardOrchestrator {
    pub fn new(workspaces: Arc<dyn WorkspacePort>, owner_key_id: KeyId) -> Self {
        Self {
            context: WizardContext::new().arc(),
            workspaces,
            owner_key_id,
        }
    }

    pub fn context(&self) -> &Arc<WizardContext> {
        &self.context
    }

    pub async fn current_step(&self) -> WizardStep {
        self.context.current_step().await
    }

    /// Apply a step-local edit to the draft.
    pub async fn edit_draft<R>(&self, f: impl FnOnce(&mut WorkspaceDraft) -> R) -> R {
        let _dispatch = self.context.acquire_dispatch_lock().await;
        self.context.with_wizard(|wizard| f(wizard.draft_mut())).await
    }

    /// Validate the current step and move forward.
    pub async fn advance(&self) -> Result<WizardStep, WizardError> {
        let _dispatch = self.context.acquire_dispatch_lock().await;

        self.context
            .with_wizard(|wizard| wizard.advance())
            .await
            .map_err(Into::into)
    }

    /// Move one step back; always permitted, never validates.
    pub async fn retreat(&self) -> WizardStep {
        let _dispatch = self.context.acquire_dispatch_lock().await;

        self.context.with_wizard(|wizard| wizard.retreat()).await
    }

    /// Serialize the draft into one creation request and hand it to the
    /// daemon. On success the wizard enters `Success` with the mnemonic
    /// stored; on failure it stays on `Review` with the draft untouched.
    pub async fn submit(&self) -> Result<Mnemonic, WizardError> {
        let _dispatch = self.context.acquire_dispatch_lock().await;

        let request = self
            .context
            .with_wizard(|wizard| {
                if wizard.step() != WizardStep::Review {
                    return Err(WizardError::NotAtReview);
                }
                wizard
                    .build_submission(self.owner_key_id.clone())
                    .map_err(WizardError::from)
            })
            .await?;

        info!(name = %request.name, "creating workspace");

        let mnemonic = self
            .workspaces
            .create_workspace(request)
            .await
            .inspect_err(|error| warn!(%error, "workspace creation failed"))?;

        self.context
            .with_wizard(|wizard| wizard.complete(mnemonic.clone()))
            .await;

        Ok(mnemonic)
    }

    /// Read-only projection for the review and success screens.
    pub async fn summary(&self) -> WorkspaceSummary {
        self.context
            .with_wizard(|wizard| WorkspaceSummary::project(wizard))
            .await
    }
}
