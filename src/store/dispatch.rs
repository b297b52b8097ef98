use crate::journal::ActionJournal;
use crate::store::action::Action;
use crate::store::reducer::{reduce, Outcome};
use crate::store::state::WalletState;
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// Cheap-to-clone sender handed to UI event handlers and async task runners.
#[derive(Debug, Clone)]
pub struct DispatchHandle {
    tx: mpsc::UnboundedSender<Action>,
}

impl DispatchHandle {
    /// Queue an action for the store. Returns false once the loop has shut
    /// down.
    pub fn dispatch(&self, action: Action) -> bool {
        self.tx.send(action).is_ok()
    }
}

/// Create the dispatch channel consumed by [`run`].
pub fn channel() -> (DispatchHandle, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DispatchHandle { tx }, rx)
}

/// Owns the wallet state and applies actions to it.
pub struct Store {
    state: WalletState,
    journal: Option<ActionJournal>,
    snapshot_tx: watch::Sender<WalletState>,
}

impl Store {
    pub fn new(journal: Option<ActionJournal>) -> Self {
        let (snapshot_tx, _) = watch::channel(WalletState::new());
        Self {
            state: WalletState::new(),
            journal,
            snapshot_tx,
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    /// Watch channel carrying a fresh snapshot after every applied action.
    /// The UI reads it to toggle loading indicators without touching the
    /// store itself.
    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.snapshot_tx.subscribe()
    }

    /// Run the reducer, journal the action if it was applied, and publish a
    /// snapshot to watchers.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = reduce(&mut self.state, &action);
        if outcome == Outcome::Applied {
            if let Some(journal) = &mut self.journal {
                journal.record(&action);
            }
            self.snapshot_tx.send_replace(self.state.clone());
        }
        outcome
    }
}

/// Single-consumer dispatch loop.
///
/// Drains the channel into the store until every [`DispatchHandle`] has been
/// dropped, then hands the store back. Dispatch stays cooperative on one
/// task, so producers never observe a half-applied transition.
pub async fn run(mut store: Store, mut rx: mpsc::UnboundedReceiver<Action>) -> Store {
    while let Some(action) = rx.recv().await {
        let kind = action.kind();
        let outcome = store.dispatch(action);
        debug!(kind, ?outcome, "dispatched");
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::LifecyclePhase;

    #[tokio::test]
    async fn test_dispatch_loop_applies_actions() {
        let store = Store::new(None);
        let (handle, rx) = channel();

        assert!(handle.dispatch(Action::discovery_started(Some(true))));
        assert!(handle.dispatch(Action::discovery_finished(None)));
        assert!(handle.dispatch(Action::LanguageChangeStarted));
        drop(handle);

        let store = run(store, rx).await;
        assert_eq!(store.state().completed_scans, 1);
        assert_eq!(store.state().language_change, LifecyclePhase::InProgress);
    }

    #[tokio::test]
    async fn test_watchers_see_snapshots() {
        let mut store = Store::new(None);
        let mut snapshots = store.subscribe();

        store.dispatch(Action::discovery_started(Some(true)));
        assert!(snapshots.has_changed().unwrap());
        let seen = snapshots.borrow_and_update().clone();
        assert!(seen.discovery.is_in_progress());
        assert!(seen.discovery_loading_visible);

        // Ignored actions publish nothing.
        store.dispatch(Action::LanguageChanged);
        assert!(!snapshots.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_dispatch_after_shutdown_fails() {
        let store = Store::new(None);
        let (handle, rx) = channel();
        drop(rx);
        assert!(!handle.dispatch(Action::LanguageChangeStarted));
        assert!(!store.state().is_busy());
    }
}
