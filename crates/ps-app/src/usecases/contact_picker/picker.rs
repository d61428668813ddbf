//! Search-and-multi-select over the contact directory.
//!
//! Opening a picker fetches the full unpaginated directory once; filtering
//! and toggling are purely local from then on. Closing the session commits
//! the selection snapshot to the caller whether or not an explicit confirm
//! was pressed.

use std::sync::Arc;

use tracing::{debug, warn};

use ps_core::ports::{ContactDirectoryPort, RemoteServiceError};
use ps_core::{Contact, ContactSelection};

/// Factory for picker sessions, one per opened dialog.
pub struct ContactPicker {
    directory: Arc<dyn ContactDirectoryPort>,
}

impl ContactPicker {
    pub fn new(directory: Arc<dyn ContactDirectoryPort>) -> Self {
        Self { directory }
    }

    /// Open a session seeded with the caller's current selection.
    ///
    /// A fetch failure is returned to the caller for transient notification
    /// display; no session is created and the caller's selection stays
    /// as it was.
    pub async fn open(
        &self,
        current: &ContactSelection,
    ) -> Result<ContactPickerSession, RemoteServiceError> {
        let contacts = self.directory.list_all().await.inspect_err(|error| {
            warn!(%error, "unable to fetch contact list");
        })?;

        debug!(count = contacts.len(), "contact directory loaded");
        Ok(ContactPickerSession::new(contacts, current.clone()))
    }
}

/// One open picker dialog.
#[derive(Debug)]
pub struct ContactPickerSession {
    directory: Vec<Contact>,
    visible: Vec<Contact>,
    selection: ContactSelection,
}

impl ContactPickerSession {
    fn new(directory: Vec<Contact>, selection: ContactSelection) -> Self {
        let visible = directory.clone();
        Self {
            directory,
            visible,
            selection,
        }
    }

    /// Re-apply the filter for the current search input.
    ///
    /// Always filters the full directory, never the previous filtered view,
    /// so deleting characters widens the result set again.
    pub fn search(&mut self, query: &str) {
        self.visible = self
            .directory
            .iter()
            .filter(|contact| contact.matches_query(query))
            .cloned()
            .collect();
    }

    /// Contacts matching the current filter, in directory order.
    pub fn visible(&self) -> &[Contact] {
        &self.visible
    }

    /// Toggle selection membership of the given contact.
    pub fn toggle(&mut self, contact: &Contact) -> bool {
        self.selection.toggle(contact.clone())
    }

    pub fn is_selected(&self, contact_id: &str) -> bool {
        self.selection.contains_id(contact_id)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Close the dialog. Closing commits: the snapshot is handed back to
    /// the caller regardless of how the dialog was dismissed.
    pub fn close(self) -> ContactSelection {
        self.selection
    }
}
