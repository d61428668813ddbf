//! Workspace domain module.
//!
//! This module defines the workspace-creation wizard: the draft aggregate,
//! the step machine, per-step validation, and the submission payload.

pub mod draft;
pub mod step;
pub mod submission;
pub mod validation;
pub mod wizard;

pub use draft::{
    AccessControlType, AdditionalOwners, AutoClose, PeerLimit, Permissions, WorkspaceDraft,
    WorkspaceType,
};
pub use step::WizardStep;
pub use submission::{AccessControl, CreateWorkspaceRequest, Mnemonic};
pub use validation::{validate_step, Field, StepErrors, ValidationError};
pub use wizard::Wizard;
