use serde::{Deserialize, Serialize};

/// An immutable description of a state-transition event.
///
/// The serde form is the wire contract: internally tagged on `"type"` with
/// the kind strings below, optional payload under `"payload"`. Journaled
/// actions and any external replay tooling depend on these strings staying
/// stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// A background address-discovery scan began. The flag says whether the
    /// UI should show a loading indicator; absent means no indicator forced.
    #[serde(rename = "discovery/addressDiscoveryStarted")]
    AddressDiscoveryStarted {
        #[serde(rename = "payload", default, skip_serializing_if = "Option::is_none")]
        show_loading: Option<bool>,
    },
    /// The discovery scan completed. Carries the same optional display flag.
    #[serde(rename = "discovery/addressDiscoveryFinished")]
    AddressDiscoveryFinished {
        #[serde(rename = "payload", default, skip_serializing_if = "Option::is_none")]
        show_loading: Option<bool>,
    },
    /// A UI language switch began.
    #[serde(rename = "app/languageChangeStarted")]
    LanguageChangeStarted,
    /// The UI language switch completed.
    #[serde(rename = "app/languageChanged")]
    LanguageChanged,
    /// Generation of new wallet addresses began.
    #[serde(rename = "address/addressGenerationStarted")]
    AddressGenerationStarted,
    /// Address generation completed.
    #[serde(rename = "address/addressesGenerated")]
    AddressesGenerated,
}

/// Namespace prefix of an action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Discovery,
    App,
    Address,
}

impl Action {
    /// Every kind string in the registry, for compatibility checks.
    pub const KINDS: [&'static str; 6] = [
        "discovery/addressDiscoveryStarted",
        "discovery/addressDiscoveryFinished",
        "app/languageChangeStarted",
        "app/languageChanged",
        "address/addressGenerationStarted",
        "address/addressesGenerated",
    ];

    pub fn discovery_started(show_loading: Option<bool>) -> Self {
        Action::AddressDiscoveryStarted { show_loading }
    }

    pub fn discovery_finished(show_loading: Option<bool>) -> Self {
        Action::AddressDiscoveryFinished { show_loading }
    }

    /// The stable kind string, identical to the serde `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddressDiscoveryStarted { .. } => "discovery/addressDiscoveryStarted",
            Action::AddressDiscoveryFinished { .. } => "discovery/addressDiscoveryFinished",
            Action::LanguageChangeStarted => "app/languageChangeStarted",
            Action::LanguageChanged => "app/languageChanged",
            Action::AddressGenerationStarted => "address/addressGenerationStarted",
            Action::AddressesGenerated => "address/addressesGenerated",
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Action::AddressDiscoveryStarted { .. } | Action::AddressDiscoveryFinished { .. } => {
                Domain::Discovery
            }
            Action::LanguageChangeStarted | Action::LanguageChanged => Domain::App,
            Action::AddressGenerationStarted | Action::AddressesGenerated => Domain::Address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_actions() -> Vec<Action> {
        vec![
            Action::discovery_started(Some(true)),
            Action::discovery_finished(None),
            Action::LanguageChangeStarted,
            Action::LanguageChanged,
            Action::AddressGenerationStarted,
            Action::AddressesGenerated,
        ]
    }

    #[test]
    fn test_kinds_are_pairwise_distinct() {
        let unique: std::collections::HashSet<_> = Action::KINDS.iter().collect();
        assert_eq!(unique.len(), Action::KINDS.len());
    }

    #[test]
    fn test_kind_matches_serde_tag() {
        for action in all_actions() {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.kind());
            assert!(Action::KINDS.contains(&action.kind()));
        }
    }

    #[test]
    fn test_discovery_started_with_payload() {
        let value = serde_json::to_value(Action::discovery_started(Some(true))).unwrap();
        assert_eq!(
            value,
            json!({"type": "discovery/addressDiscoveryStarted", "payload": true})
        );
    }

    #[test]
    fn test_omitted_payload_has_no_payload_field() {
        let value = serde_json::to_value(Action::discovery_started(None)).unwrap();
        assert_eq!(value, json!({"type": "discovery/addressDiscoveryStarted"}));

        let back: Action = serde_json::from_value(value).unwrap();
        assert_eq!(back, Action::discovery_started(None));
    }

    #[test]
    fn test_language_changed_is_bare() {
        let value = serde_json::to_value(Action::LanguageChanged).unwrap();
        assert_eq!(value, json!({"type": "app/languageChanged"}));
    }

    #[test]
    fn test_json_round_trip() {
        for action in all_actions() {
            let encoded = serde_json::to_string(&action).unwrap();
            let decoded: Action = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, action);
        }
    }

    #[test]
    fn test_domains() {
        assert_eq!(Action::discovery_finished(None).domain(), Domain::Discovery);
        assert_eq!(Action::LanguageChangeStarted.domain(), Domain::App);
        assert_eq!(Action::AddressesGenerated.domain(), Domain::Address);
    }
}
