use crate::identity::KeyPair;
use crate::ids::KeyId;

/// Result of offering a validated candidate to the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOffer {
    /// No key was active; the candidate is now the active pair.
    Committed { key_id: KeyId },

    /// A key is already active. The candidate is parked in the pending slot
    /// and the user must confirm the overwrite. `existing` is the fingerprint
    /// about to be replaced, which is what the confirmation prompt displays.
    AwaitingConfirmation { existing: KeyId },
}

/// Guarded holder for the at-most-one active key pair of a form.
///
/// 密钥槽状态机：
/// ```text
/// Idle（无待确认）
///  │ offer，且已有活动密钥
///  ▼
/// PendingConfirmation（候选密钥停放在 pending 槽）
///  ├── confirm ──► pending 替换 active，回到 Idle
///  └── decline ──► 丢弃 pending，active 不变，回到 Idle
/// ```
///
/// The pending slot is a single-slot mailbox, not a queue: a second candidate
/// arriving while a confirmation is open replaces the parked one
/// (last write wins).
#[derive(Debug, Default)]
pub struct KeySlot {
    active: Option<KeyPair>,
    pending: Option<KeyPair>,
}

impl KeySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot seeded with an already-attached pair (edit flows).
    pub fn with_active(pair: KeyPair) -> Self {
        Self {
            active: Some(pair),
            pending: None,
        }
    }

    /// Offer a freshly validated candidate.
    ///
    /// Commits immediately when nothing is active; otherwise parks the
    /// candidate and asks for confirmation.
    pub fn offer(&mut self, candidate: KeyPair) -> KeyOffer {
        match &self.active {
            None => {
                let key_id = candidate.key_id.clone();
                self.active = Some(candidate);
                KeyOffer::Committed { key_id }
            }
            Some(active) => {
                let existing = active.key_id.clone();
                self.pending = Some(candidate);
                KeyOffer::AwaitingConfirmation { existing }
            }
        }
    }

    /// User confirmed the overwrite: the pending pair becomes active.
    ///
    /// Returns the new active fingerprint, or `None` when no confirmation
    /// was open (the prompt already closed).
    pub fn confirm_overwrite(&mut self) -> Option<KeyId> {
        let pending = self.pending.take()?;
        let key_id = pending.key_id.clone();
        self.active = Some(pending);
        Some(key_id)
    }

    /// User declined the overwrite: the candidate is discarded entirely.
    pub fn decline_overwrite(&mut self) {
        self.pending = None;
    }

    /// Explicit removal of the active pair, independent of acquisition.
    /// Also drops any parked candidate.
    pub fn remove_active(&mut self) {
        self.active = None;
        self.pending = None;
    }

    pub fn active(&self) -> Option<&KeyPair> {
        self.active.as_ref()
    }

    pub fn active_key_id(&self) -> Option<&KeyId> {
        self.active.as_ref().map(|pair| &pair.key_id)
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
