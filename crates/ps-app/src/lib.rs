//! # ps-app
//!
//! Application services for Peerspace: the key acquisition engine, the
//! contact picker, the workspace wizard orchestrator, and the identity
//! save flow. Use cases depend on `ps-core` ports only; adapters are
//! injected as `Arc<dyn Port>`.

pub mod models;
pub mod usecases;

pub use models::WorkspaceSummary;
pub use usecases::contact_picker::{ContactPicker, ContactPickerSession};
pub use usecases::identity::{SaveIdentity, SaveIdentityError};
pub use usecases::key_acquisition::{
    KeyAcquisitionContext, KeyAcquisitionEngine, KeyAcquisitionError, KeyContext, KeyOutcome,
};
pub use usecases::workspace_wizard::{WizardContext, WizardError, WizardOrchestrator};
