//! Player intents submitted to the transition function.
//!
//! Actions carry no payload: the acting combatant is always the one named by
//! `GameState::turn`, and the target is always the opponent. The engine
//! accepts exactly these four tags; anything else a host receives (from a
//! form, a CLI, a button id) must be parsed, and rejected, before it
//! reaches the core.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::combatant::CombatantId;

/// One of the four player intents.
///
/// ## Example
///
/// ```
/// use duel_core::core::Action;
///
/// let action: Action = "fire".parse().unwrap();
/// assert_eq!(action, Action::Fire);
///
/// assert!("teleport".parse::<Action>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Begin the match from the idle phase.
    Start,
    /// Fire one round at the opponent.
    Fire,
    /// Load up to three rounds, capped at the magazine limit.
    Reload,
    /// Start a fresh round, carrying scores over.
    Reset,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Action; 4] = [Action::Start, Action::Fire, Action::Reload, Action::Reset];

    /// The canonical lowercase tag for this action.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Fire => "fire",
            Action::Reload => "reload",
            Action::Reset => "reset",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A host submitted an action tag outside the four-member action set.
///
/// Raised at the parsing boundary; the transition function itself is total
/// over [`Action`] and never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown action tag: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| s.eq_ignore_ascii_case(action.tag()))
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// A recorded action with metadata for the session transcript.
///
/// Used for replay and debugging: replaying the recorded actions against the
/// same seed reproduces the duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The combatant who held the turn when the action was applied.
    pub actor: CombatantId,

    /// The action taken.
    pub action: Action,

    /// Position in the transcript (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(actor: CombatantId, action: Action, sequence: u32) -> Self {
        Self {
            actor,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for action in Action::ALL {
            let parsed: Action = action.tag().parse().unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FIRE".parse::<Action>().unwrap(), Action::Fire);
        assert_eq!("Reload".parse::<Action>().unwrap(), Action::Reload);
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        let err = "teleport".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("teleport".to_string()));
        assert_eq!(format!("{err}"), "unknown action tag: \"teleport\"");

        assert!("".parse::<Action>().is_err());
        assert!(" fire".parse::<Action>().is_err());
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(format!("{}", Action::Start), "start");
        assert_eq!(format!("{}", Action::Reset), "reset");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(CombatantId::P1, Action::Fire, 3);

        assert_eq!(record.actor, CombatantId::P1);
        assert_eq!(record.action, Action::Fire);
        assert_eq!(record.sequence, 3);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::Reload).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, Action::Reload);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(CombatantId::P2, Action::Reset, 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
