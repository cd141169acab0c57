//! Read-only match snapshot types.
//!
//! A [`BoardSnapshot`] captures everything the advisor is allowed to see for
//! one evaluation: the ordered hand, both board sides, the enemy hero, mana,
//! the turn counter, and the current spell-power bonus. Snapshots are built
//! fresh by the host each turn and never mutated by this workspace; every
//! evaluation is a pure function of one snapshot.

mod card;
mod hero;
mod minion;

pub use card::{CardId, CardInHand, CardType};
pub use hero::HeroState;
pub use minion::{Minion, MinionFlags};

use arrayvec::ArrayVec;

use crate::config::ProfileConfig;

/// Bounded hand storage (hand order preserved).
pub type Hand = ArrayVec<CardInHand, { ProfileConfig::MAX_HAND_CARDS }>;

/// Bounded storage for one side of the board.
pub type BoardSide = ArrayVec<Minion, { ProfileConfig::MAX_BOARD_MINIONS }>;

/// Complete read-only view of the match for one evaluation call.
///
/// # Invariants
///
/// - `hand` preserves the host's hand order; the sequencer's first-fit policy
///   depends on it.
/// - Values are already post-effect (current costs, current stats); nothing
///   here is recomputed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    /// Cards in hand, in hand order.
    pub hand: Hand,
    /// Friendly minions on the board.
    pub friendly_minions: BoardSide,
    /// Enemy minions on the board.
    pub enemy_minions: BoardSide,
    /// Enemy hero health and armor.
    pub enemy_hero: HeroState,
    /// Mana crystals available this turn.
    pub mana_available: i32,
    /// Maximum (permanent) mana crystals.
    pub max_mana: i32,
    /// Turn counter, starting at 1.
    pub turn: u32,
    /// Current spell-power bonus, applied per damage spell.
    pub spell_power: i32,
    /// Attack value of the enemy weapon, if one is equipped.
    pub enemy_weapon_attack: Option<i32>,
    /// Our hero power's card identity, if known to the host.
    pub own_hero_power: Option<CardId>,
}

impl BoardSnapshot {
    pub fn builder() -> BoardSnapshotBuilder {
        BoardSnapshotBuilder::default()
    }

    /// True if at least one copy of `id` is in hand.
    pub fn has_card_in_hand(&self, id: CardId) -> bool {
        self.hand.iter().any(|card| card.id == id)
    }

    /// Number of copies of `id` in hand.
    pub fn count_in_hand(&self, id: CardId) -> usize {
        self.hand.iter().filter(|card| card.id == id).count()
    }

    /// Cheapest in-hand copy of `id`, if any.
    pub fn min_cost_in_hand(&self, id: CardId) -> Option<i32> {
        self.hand
            .iter()
            .filter(|card| card.id == id)
            .map(|card| card.cost)
            .min()
    }

    /// Number of minion cards in hand.
    pub fn minions_in_hand(&self) -> usize {
        self.hand.iter().filter(|card| card.is_minion()).count()
    }

    /// True if any enemy minion is a taunt that is not stealthed.
    ///
    /// A stealthed taunt cannot block, so it does not count.
    pub fn has_enemy_taunt(&self) -> bool {
        self.enemy_minions
            .iter()
            .any(|minion| minion.is_taunt() && !minion.is_stealth())
    }

    /// Total attack the friendly board can send at the enemy hero this turn.
    ///
    /// Zero whenever an enemy taunt blocks face damage.
    pub fn minion_attack_this_turn(&self) -> i32 {
        if self.has_enemy_taunt() {
            return 0;
        }
        self.friendly_minions
            .iter()
            .filter(|minion| minion.can_attack())
            .map(|minion| minion.attack)
            .sum()
    }

    /// Enemy hero health plus armor.
    #[inline]
    pub fn effective_enemy_health(&self) -> i32 {
        self.enemy_hero.effective_health()
    }

    /// Number of stealthed friendly copies of `id` on the board.
    pub fn stealthed_copies_on_board(&self, id: CardId) -> usize {
        self.friendly_minions
            .iter()
            .filter(|minion| minion.id == id && minion.is_stealth())
            .count()
    }
}

/// Builder for constructing snapshots fluently.
///
/// Entries pushed beyond the fixed capacities are silently dropped; a hand or
/// board larger than the game allows is a host contract violation, and the
/// advisor degrades rather than panics.
#[derive(Debug, Default)]
pub struct BoardSnapshotBuilder {
    snapshot: BoardSnapshot,
}

impl BoardSnapshotBuilder {
    /// Append a card to the hand (hand order).
    pub fn card(mut self, card: CardInHand) -> Self {
        let _ = self.snapshot.hand.try_push(card);
        self
    }

    /// Append a friendly minion to the board.
    pub fn friendly(mut self, minion: Minion) -> Self {
        let _ = self.snapshot.friendly_minions.try_push(minion);
        self
    }

    /// Append an enemy minion to the board.
    pub fn enemy(mut self, minion: Minion) -> Self {
        let _ = self.snapshot.enemy_minions.try_push(minion);
        self
    }

    pub fn enemy_hero(mut self, health: i32, armor: i32) -> Self {
        self.snapshot.enemy_hero = HeroState::new(health, armor);
        self
    }

    pub fn mana(mut self, available: i32, max: i32) -> Self {
        self.snapshot.mana_available = available;
        self.snapshot.max_mana = max;
        self
    }

    pub fn turn(mut self, turn: u32) -> Self {
        self.snapshot.turn = turn;
        self
    }

    pub fn spell_power(mut self, spell_power: i32) -> Self {
        self.snapshot.spell_power = spell_power;
        self
    }

    pub fn enemy_weapon_attack(mut self, attack: i32) -> Self {
        self.snapshot.enemy_weapon_attack = Some(attack);
        self
    }

    pub fn own_hero_power(mut self, id: CardId) -> Self {
        self.snapshot.own_hero_power = Some(id);
        self
    }

    pub fn build(self) -> BoardSnapshot {
        self.snapshot
    }
}
