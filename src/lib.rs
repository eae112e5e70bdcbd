//! # duel-core
//!
//! A deterministic turn-based duel engine.
//!
//! ## Design Principles
//!
//! 1. **One pure transition function**: the entire rule set is
//!    `DuelEngine::apply(state, action, rng) -> state`. No other code path
//!    flips turns, changes phases, or touches the invariants.
//!
//! 2. **Immutable state values**: `GameState` is a plain value with
//!    structural equality. Transitions build successors; the host replaces
//!    its current value wholesale and renders from the snapshot.
//!
//! 3. **Injectable randomness**: combat resolution draws unit values through
//!    the `UnitRng` seam. Production wires a seeded ChaCha8 generator;
//!    tests wire a scripted sequence and force any outcome.
//!
//! 4. **No failures in the core**: every `(state, action)` pair has a
//!    defined successor. Out-of-phase actions are no-ops, firing dry just
//!    changes the message, and malformed host input is rejected at the
//!    parsing boundary before it reaches the engine.
//!
//! ## Modules
//!
//! - `core`: combatants, state, actions, RNG, configuration
//! - `combat`: hit/miss and damage resolution for one shot
//! - `engine`: the transition function and legal-action enumeration
//! - `session`: host-facing dispatcher owning state, RNG, and transcript
//!
//! ## Example
//!
//! ```
//! use duel_core::{Action, DuelSession, Phase};
//!
//! let mut session = DuelSession::new(42);
//! session.dispatch(Action::Start);
//!
//! while session.state().phase == Phase::Active {
//!     let action = if session.state().turn_combatant().has_ammo() {
//!         Action::Fire
//!     } else {
//!         Action::Reload
//!     };
//!     session.dispatch(action);
//! }
//!
//! assert!(session.state().winner.is_some());
//! ```

pub mod combat;
pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Combatant, CombatantId, CombatantPair, DuelConfig, DuelRng, DuelRngState,
    GameState, ParseActionError, Phase, SequenceRng, UnitRng,
};

pub use crate::combat::{resolve_shot, ShotOutcome};

pub use crate::engine::DuelEngine;

pub use crate::session::DuelSession;
