//! Key acquisition use cases.
//!
//! Produces exactly one validated key pair per form from one of three input
//! modes, with the overwrite guard protecting the active pair.

pub mod context;
pub mod engine;

pub use context::KeyAcquisitionContext;
pub use engine::{KeyAcquisitionEngine, KeyAcquisitionError, KeyContext, KeyOutcome};
