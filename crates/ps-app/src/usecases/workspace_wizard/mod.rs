//! Workspace wizard use cases.

pub mod context;
pub mod orchestrator;

pub use context::WizardContext;
pub use orchestrator::{WizardError, WizardOrchestrator};
