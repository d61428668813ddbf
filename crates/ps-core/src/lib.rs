//! # ps-core
//!
//! Core domain models and business logic for Peerspace.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod contact;
pub mod identity;
pub mod ids;
pub mod ports;
pub mod security;
pub mod workspace;

// Re-export commonly used types at the crate root
pub use config::ClientConfig;
pub use contact::{Contact, ContactSelection};
pub use identity::{KeyOffer, KeyPair, KeySlot};
pub use ids::KeyId;
pub use security::SecretString;
pub use workspace::{
    AccessControl, AccessControlType, CreateWorkspaceRequest, Mnemonic, Permissions,
    ValidationError, Wizard, WizardStep, WorkspaceDraft, WorkspaceType,
};
