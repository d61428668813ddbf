use crate::contact::Contact;
use crate::ports::errors::RemoteServiceError;

/// Read access to the local contact directory.
#[async_trait::async_trait]
pub trait ContactDirectoryPort: Send + Sync {
    /// Fetch the entire directory in one unpaginated call. The picker
    /// filters client-side, so pagination is deliberately bypassed.
    async fn list_all(&self) -> Result<Vec<Contact>, RemoteServiceError>;
}
