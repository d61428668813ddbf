use crate::ports::errors::RemoteServiceError;
use crate::workspace::{CreateWorkspaceRequest, Mnemonic};

/// Workspace creation against the local daemon.
#[async_trait::async_trait]
pub trait WorkspacePort: Send + Sync {
    /// Create the workspace in a single atomic request; the returned
    /// mnemonic is the workspace's shareable identifier.
    async fn create_workspace(
        &self,
        request: CreateWorkspaceRequest,
    ) -> Result<Mnemonic, RemoteServiceError>;
}
