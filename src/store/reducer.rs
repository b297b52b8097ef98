use crate::store::action::Action;
use crate::store::state::{LifecyclePhase, WalletState};
use tracing::warn;

/// Result of applying an action to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action matched the expected phase and the state was updated.
    Applied,
    /// The action arrived out of order and the state was left untouched.
    Ignored,
}

/// The single update function: folds one action into the state.
///
/// Ordering is enforced here, not by the action values: a completion for a
/// domain that is idle, or a start for a domain already in progress, is
/// ignored with a warning.
pub fn reduce(state: &mut WalletState, action: &Action) -> Outcome {
    let outcome = match action {
        Action::AddressDiscoveryStarted { show_loading } => {
            if state.discovery.is_in_progress() {
                Outcome::Ignored
            } else {
                state.discovery = LifecyclePhase::InProgress;
                state.discovery_loading_visible = show_loading.unwrap_or(false);
                Outcome::Applied
            }
        }
        Action::AddressDiscoveryFinished { .. } => {
            if state.discovery.is_in_progress() {
                state.discovery = LifecyclePhase::Idle;
                state.discovery_loading_visible = false;
                state.completed_scans += 1;
                Outcome::Applied
            } else {
                Outcome::Ignored
            }
        }
        Action::LanguageChangeStarted => {
            if state.language_change.is_in_progress() {
                Outcome::Ignored
            } else {
                state.language_change = LifecyclePhase::InProgress;
                Outcome::Applied
            }
        }
        Action::LanguageChanged => {
            if state.language_change.is_in_progress() {
                state.language_change = LifecyclePhase::Idle;
                Outcome::Applied
            } else {
                Outcome::Ignored
            }
        }
        Action::AddressGenerationStarted => {
            if state.address_generation.is_in_progress() {
                Outcome::Ignored
            } else {
                state.address_generation = LifecyclePhase::InProgress;
                Outcome::Applied
            }
        }
        Action::AddressesGenerated => {
            if state.address_generation.is_in_progress() {
                state.address_generation = LifecyclePhase::Idle;
                state.generation_runs += 1;
                Outcome::Applied
            } else {
                Outcome::Ignored
            }
        }
    };

    match outcome {
        Outcome::Applied => state.dirty = true,
        Outcome::Ignored => warn!(kind = action.kind(), "ignoring out-of-order action"),
    }
    outcome
}
