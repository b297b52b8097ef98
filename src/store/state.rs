use crate::store::action::Domain;

/// Two-phase cycle each lifecycle domain moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    InProgress,
}

impl LifecyclePhase {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, LifecyclePhase::InProgress)
    }
}

/// Explicit state container for the wallet UI.
///
/// Owned by a single `Store` and passed by reference wherever it is read;
/// there is no ambient singleton. All mutation goes through the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletState {
    pub discovery: LifecyclePhase,
    pub language_change: LifecyclePhase,
    pub address_generation: LifecyclePhase,
    /// Whether the UI should show the discovery loading indicator. Only ever
    /// true while a scan is in progress; an absent payload never forces it.
    pub discovery_loading_visible: bool,
    pub completed_scans: u64,
    pub generation_runs: u64,
    /// Set whenever the reducer changed something; the UI clears it after a
    /// redraw.
    pub dirty: bool,
}

impl WalletState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, domain: Domain) -> LifecyclePhase {
        match domain {
            Domain::Discovery => self.discovery,
            Domain::App => self.language_change,
            Domain::Address => self.address_generation,
        }
    }

    /// True while any lifecycle domain is mid-transition.
    pub fn is_busy(&self) -> bool {
        self.discovery.is_in_progress()
            || self.language_change.is_in_progress()
            || self.address_generation.is_in_progress()
    }
}
