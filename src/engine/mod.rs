//! The transition function: the entire duel rule set.
//!
//! `DuelEngine::apply` maps `(state, action)` to a successor state. It is
//! total and side-effect-free: every pair has a defined successor, illegal
//! or out-of-phase actions return the input unchanged, and "errors" (firing
//! dry, acting outside an active match) are ordinary states whose message
//! explains what happened. The engine is the only place turns flip, phases
//! change, and the state invariants are enforced.
//!
//! ## State machine
//!
//! `Idle --Start--> Active`; `Active --Fire (lethal)--> Finished`;
//! `Active --Fire (miss or non-lethal) / Reload--> Active` with the turn
//! flipped, except the out-of-ammo `Fire` which changes nothing but the
//! message; `any --Reset--> Active` with scores carried over. `Finished` is
//! terminal apart from `Reset`.

use crate::combat::resolve_shot;
use crate::core::{Action, DuelConfig, GameState, Phase, UnitRng};

/// The duel rule set, bound to one configuration.
///
/// Owns no mutable state: the host keeps the current [`GameState`] and
/// replaces it with each value `apply` returns.
#[derive(Clone, Debug, Default)]
pub struct DuelEngine {
    config: DuelConfig,
}

impl DuelEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine applies.
    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// The session-initial state: idle phase, full health, starting ammo,
    /// zero scores.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Apply one action to a state, producing the successor state.
    ///
    /// Total over the four actions. Outside the `Active` phase every action
    /// except `Start` and `Reset` is a strict no-op, so stray combat actions
    /// are idempotent before a match starts and after it ends.
    #[must_use]
    pub fn apply<R: UnitRng>(&self, state: &GameState, action: Action, rng: &mut R) -> GameState {
        if state.phase != Phase::Active && !matches!(action, Action::Start | Action::Reset) {
            return state.clone();
        }

        match action {
            Action::Start => self.start(state),
            Action::Fire => self.fire(state, rng),
            Action::Reload => self.reload(state),
            Action::Reset => self.reset(state),
        }
    }

    /// The actions a host can meaningfully submit in this state.
    ///
    /// Advisory: `apply` stays total regardless. Mirrors what a front end
    /// would enable: firing needs ammo, reloading needs magazine room, and a
    /// match can always be reset once it has started.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        match state.phase {
            Phase::Idle => vec![Action::Start],
            Phase::Active => {
                let mut actions = Vec::new();
                let actor = state.turn_combatant();
                if actor.has_ammo() {
                    actions.push(Action::Fire);
                }
                if actor.ammo < self.config.max_ammo {
                    actions.push(Action::Reload);
                }
                actions.push(Action::Reset);
                actions
            }
            Phase::Finished => vec![Action::Reset],
        }
    }

    fn start(&self, state: &GameState) -> GameState {
        // Only edge out of Idle. Re-starting an active or finished match
        // would resurrect a dead combatant, so it is a no-op.
        if state.phase != Phase::Idle {
            return state.clone();
        }

        let mut next = state.clone();
        next.phase = Phase::Active;
        next.message = format!("Match started! It is {}'s turn.", next.turn_combatant().name);
        next
    }

    fn reload(&self, state: &GameState) -> GameState {
        let actor = state.turn;

        let mut next = state.clone();
        next.combatants[actor].reload(self.config.reload_amount, self.config.max_ammo);
        next.turn = actor.opponent();
        next.message = format!("{} reloaded.", next.combatants[actor].name);
        next
    }

    fn fire<R: UnitRng>(&self, state: &GameState, rng: &mut R) -> GameState {
        let actor = state.turn;
        let target = actor.opponent();

        if !state.combatants[actor].has_ammo() {
            // Strict no-op apart from the message: no turn flip, no ammo
            // change. Checking an empty magazine costs nothing.
            let mut next = state.clone();
            next.message = format!(
                "{} is out of ammunition. Reload!",
                next.combatants[actor].name
            );
            return next;
        }

        let mut next = state.clone();
        next.combatants[actor].spend_round();

        let outcome = resolve_shot(rng, &self.config);

        if !outcome.hit {
            next.turn = target;
            next.message = format!("{} fired and missed.", next.combatants[actor].name);
            return next;
        }

        if next.combatants[target].health <= outcome.damage {
            // Lethal hit ends the duel. The turn stays with the victor; the
            // round spent on the killing shot stays spent.
            next.combatants[target].take_damage(outcome.damage);
            next.phase = Phase::Finished;
            next.winner = Some(next.combatants[actor].name.clone());
            next.combatants[actor].score += 1;
            next.message = format!(
                "{} has eliminated {}!",
                next.combatants[actor].name, next.combatants[target].name
            );
        } else {
            next.combatants[target].take_damage(outcome.damage);
            next.turn = target;
            next.message = format!(
                "{} hit! {} loses {} health.",
                next.combatants[actor].name, next.combatants[target].name, outcome.damage
            );
        }

        next
    }

    fn reset(&self, state: &GameState) -> GameState {
        let mut next = self.initial_state();
        next.phase = Phase::Active;
        for (id, combatant) in state.combatants.iter() {
            next.combatants[id].score = combatant.score;
        }
        next.message = "New round! The duel has been reset.".to_string();
        next
    }
}
