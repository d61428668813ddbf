use serde::{Deserialize, Serialize};

use crate::contact::Contact;

/// A duplicate-free set of contacts, keyed by contact id.
///
/// 联系人选择集合：按 id 去重，保留插入顺序（仅用于显示编号）。
///
/// Membership is mutated only through [`ContactSelection::toggle`]; toggling
/// a member removes it, toggling a non-member appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSelection {
    items: Vec<Contact>,
}

impl ContactSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of the given contact. Returns `true` when the
    /// contact was added, `false` when it was removed.
    pub fn toggle(&mut self, contact: Contact) -> bool {
        match self.items.iter().position(|c| c.id == contact.id) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(contact);
                true
            }
        }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Public keys of the selected contacts, in insertion order.
    pub fn public_keys(&self) -> Vec<String> {
        self.items.iter().map(|c| c.public_key.clone()).collect()
    }
}

impl FromIterator<Contact> for ContactSelection {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut selection = Self::new();
        for contact in iter {
            if !selection.contains_id(&contact.id) {
                selection.items.push(contact);
            }
        }
        selection
    }
}
