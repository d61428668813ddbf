pub mod workspace_summary;

pub use workspace_summary::{AccessControlSummary, WorkspaceSummary};
