//! Combatant identification and per-combatant data storage.
//!
//! ## CombatantId
//!
//! Type-safe identifier for the two duelists. A duel always has exactly two
//! sides, so the id is a closed enum rather than a numeric index.
//!
//! ## CombatantPair
//!
//! Fixed two-element storage addressed by `CombatantId`. Supports iteration
//! and indexing, so transition code never selects a side by string key.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two duel sides.
///
/// ```
/// use duel_core::core::CombatantId;
///
/// assert_eq!(CombatantId::P1.opponent(), CombatantId::P2);
/// assert_eq!(CombatantId::P2.opponent(), CombatantId::P1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantId {
    /// First side; acts first in a fresh duel.
    P1,
    /// Second side.
    P2,
}

impl CombatantId {
    /// Both ids in turn order.
    pub const BOTH: [CombatantId; 2] = [CombatantId::P1, CombatantId::P2];

    /// The other side of the duel.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            CombatantId::P1 => CombatantId::P2,
            CombatantId::P2 => CombatantId::P1,
        }
    }

    /// Storage index (0 for P1, 1 for P2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CombatantId::P1 => 0,
            CombatantId::P2 => 1,
        }
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::P1 => write!(f, "P1"),
            CombatantId::P2 => write!(f, "P2"),
        }
    }
}

/// One duel participant and their mutable combat attributes.
///
/// Field bounds are invariants of the engine: `0 <= health <= max_health`,
/// `0 <= ammo <= max_ammo`, and `score` never decreases. The mutators here
/// clamp rather than error; bounds violations are not representable through
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Which side this combatant fights for. Fixed for the session.
    pub id: CombatantId,

    /// Display label. Fixed for the session.
    pub name: String,

    /// Remaining health.
    pub health: i32,

    /// Remaining ammunition.
    pub ammo: i32,

    /// Duels won this session. Survives round resets.
    pub score: u32,
}

impl Combatant {
    /// Create a combatant at the given starting values.
    #[must_use]
    pub fn new(id: CombatantId, name: impl Into<String>, health: i32, ammo: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        assert!(ammo >= 0, "Starting ammo must be non-negative");

        Self {
            id,
            name: name.into(),
            health,
            ammo,
            score: 0,
        }
    }

    /// Whether this combatant is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether this combatant can fire.
    #[must_use]
    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }

    /// Reduce health by `amount`, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Add `amount` rounds, clamping at `max_ammo`.
    pub fn reload(&mut self, amount: i32, max_ammo: i32) {
        self.ammo = (self.ammo + amount).min(max_ammo);
    }

    /// Spend one round. Caller must check `has_ammo` first; spending from
    /// empty would break the ammo lower bound.
    pub fn spend_round(&mut self) {
        debug_assert!(self.ammo > 0, "spend_round called with empty magazine");
        self.ammo -= 1;
    }
}

/// Per-combatant data storage with O(1) access.
///
/// Backed by a fixed `[T; 2]` with one entry per side.
///
/// ## Example
///
/// ```
/// use duel_core::core::{CombatantId, CombatantPair};
///
/// let mut ammo: CombatantPair<i32> = CombatantPair::new(5, 5);
///
/// assert_eq!(ammo[CombatantId::P1], 5);
///
/// ammo[CombatantId::P2] = 3;
/// assert_eq!(ammo[CombatantId::P2], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantPair<T> {
    data: [T; 2],
}

impl<T> CombatantPair<T> {
    /// Create a pair from explicit P1 and P2 values.
    #[must_use]
    pub fn new(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a pair with values from a factory function.
    ///
    /// The factory receives the `CombatantId` for each side.
    pub fn from_fn(factory: impl Fn(CombatantId) -> T) -> Self {
        Self {
            data: [factory(CombatantId::P1), factory(CombatantId::P2)],
        }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, id: CombatantId) -> &T {
        &self.data[id.index()]
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, id: CombatantId) -> &mut T {
        &mut self.data[id.index()]
    }

    /// Iterate over (CombatantId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &T)> {
        CombatantId::BOTH.iter().map(|&id| (id, self.get(id)))
    }
}

impl<T> Index<CombatantId> for CombatantPair<T> {
    type Output = T;

    fn index(&self, id: CombatantId) -> &Self::Output {
        self.get(id)
    }
}

impl<T> IndexMut<CombatantId> for CombatantPair<T> {
    fn index_mut(&mut self, id: CombatantId) -> &mut Self::Output {
        self.get_mut(id)
    }
}
