use std::sync::Arc;

use tokio::sync::Mutex;

use ps_core::{Wizard, WizardStep};

/// Shared wizard context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `wizard`.
/// - `dispatch_lock`: serializes whole dispatch operations (validate +
///   transition + submission) so they run atomically.
/// - `wizard`: guards the state itself and is also taken alone for reads.
pub struct WizardContext {
    wizard: Mutex<Wizard>,
    dispatch_lock: Mutex<()>,
}

impl WizardContext {
    pub fn new() -> Self {
        Self {
            wizard: Mutex::new(Wizard::new()),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read of the current step; does NOT take the dispatch lock.
    pub async fn current_step(&self) -> WizardStep {
        self.wizard.lock().await.step()
    }

    /// Acquire the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Run a closure against the locked wizard.
    pub async fn with_wizard<R>(&self, f: impl FnOnce(&mut Wizard) -> R) -> R {
        let mut wizard = self.wizard.lock().await;
        f(&mut wizard)
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new()
    }
}
