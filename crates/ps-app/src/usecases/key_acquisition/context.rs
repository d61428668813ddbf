use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use ps_core::KeySlot;

/// Shared state of one key-acquisition form.
///
/// Holds the guarded key slot, the in-flight text-entry buffer, and the
/// request sequence used for the last-write-wins policy on validation
/// responses.
///
/// ## Lock ordering
/// `slot` and `entry_buffer` are never held at the same time except inside
/// [`KeyAcquisitionContext::reset`], which acquires `slot` first.
#[derive(Default)]
pub struct KeyAcquisitionContext {
    slot: Mutex<KeySlot>,
    entry_buffer: Mutex<String>,
    request_seq: AtomicU64,
}

impl KeyAcquisitionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with an already-attached pair (edit flows).
    pub fn with_active(pair: ps_core::KeyPair) -> Self {
        Self {
            slot: Mutex::new(KeySlot::with_active(pair)),
            entry_buffer: Mutex::new(String::new()),
            request_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Issue the next request token. Tokens are strictly increasing; a
    /// response may only commit while its token is still the latest issued.
    pub fn next_token(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, token: u64) -> bool {
        self.request_seq.load(Ordering::SeqCst) == token
    }

    /// Run a closure against the locked slot.
    pub async fn with_slot<R>(&self, f: impl FnOnce(&mut KeySlot) -> R) -> R {
        let mut slot = self.slot.lock().await;
        f(&mut slot)
    }

    pub async fn set_entry_buffer(&self, text: &str) {
        let mut buffer = self.entry_buffer.lock().await;
        buffer.clear();
        buffer.push_str(text);
    }

    pub async fn entry_buffer(&self) -> String {
        self.entry_buffer.lock().await.clone()
    }

    /// Clear the slot and the text-entry buffer: the user starts over.
    pub async fn reset(&self) {
        let mut slot = self.slot.lock().await;
        slot.remove_active();
        drop(slot);

        self.entry_buffer.lock().await.clear();
    }
}
