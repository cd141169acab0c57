//! Tactic rule tables and the oracle that serves them.

use crate::state::{BoardSnapshot, CardId};

/// The fixed two-card burst combo this profile plays around.
///
/// `enabler` is the damage-multiplier half, `finisher` the mass-attack half.
/// Both must be in hand simultaneously for the combo to be "in hand"; the
/// cheapest in-hand copy of each defines the combo cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboDescriptor {
    pub enabler: CardId,
    pub finisher: CardId,
}

impl ComboDescriptor {
    pub const fn new(enabler: CardId, finisher: CardId) -> Self {
        Self { enabler, finisher }
    }
}

/// Which per-card modifier table an adjustment writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjustmentSlot {
    Spells,
    Minions,
}

/// One per-card weight adjustment emitted by a matched opening rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAdjustment {
    pub slot: AdjustmentSlot,
    pub card: CardId,
    pub value: i32,
}

impl CardAdjustment {
    pub const fn spell(card: CardId, value: i32) -> Self {
        Self {
            slot: AdjustmentSlot::Spells,
            card,
            value,
        }
    }

    pub const fn minion(card: CardId, value: i32) -> Self {
        Self {
            slot: AdjustmentSlot::Minions,
            card,
            value,
        }
    }
}

/// A data-driven early-turn play preference.
///
/// Rules are evaluated in table order for the snapshot's turn; every
/// matching rule applies its adjustments, and an `exclusive` match stops the
/// scan (mirroring "we found our opening, ignore the fallbacks").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningRule {
    /// Turn this rule applies on.
    pub turn: u32,
    /// Every listed card must be in hand.
    pub requires_in_hand: &'static [CardId],
    /// None of the listed cards may be in hand.
    pub requires_not_in_hand: &'static [CardId],
    /// If set, the rule only applies at exactly this much available mana.
    pub mana_exactly: Option<i32>,
    /// If set, the rule only applies while the enemy weapon attack is below
    /// this value (no weapon passes).
    pub max_enemy_weapon_attack: Option<i32>,
    /// If set, the rule only applies while the enemy weapon attack is at
    /// least this value.
    pub min_enemy_weapon_attack: Option<i32>,
    /// Adjustments written into the parameters when the rule matches.
    pub adjustments: &'static [CardAdjustment],
    /// Whether a match stops further rules for this turn.
    pub exclusive: bool,
}

impl OpeningRule {
    /// True if this rule's conditions hold for `snapshot`.
    ///
    /// The turn check is included, so callers may scan the whole table.
    pub fn matches(&self, snapshot: &BoardSnapshot) -> bool {
        if self.turn != snapshot.turn {
            return false;
        }
        if let Some(mana) = self.mana_exactly
            && snapshot.mana_available != mana
        {
            return false;
        }
        if let Some(limit) = self.max_enemy_weapon_attack
            && snapshot.enemy_weapon_attack.is_some_and(|attack| attack >= limit)
        {
            return false;
        }
        if let Some(floor) = self.min_enemy_weapon_attack
            && !snapshot.enemy_weapon_attack.is_some_and(|attack| attack >= floor)
        {
            return false;
        }
        if !self
            .requires_in_hand
            .iter()
            .all(|&card| snapshot.has_card_in_hand(card))
        {
            return false;
        }
        self.requires_not_in_hand
            .iter()
            .all(|&card| !snapshot.has_card_in_hand(card))
    }
}

/// Oracle providing the static tactic tables for one profile.
///
/// Implementations live in `advisor-content`; the engine never hardcodes
/// table contents, which keeps every heuristic testable against synthetic
/// tables.
pub trait RulesOracle: Send + Sync {
    /// The burst combo this profile is built around.
    fn combo(&self) -> ComboDescriptor;

    /// True if `card` is exempt from the trade projection (its death still
    /// yields a fresh attacker, e.g. a deploy-on-death minion).
    fn is_trade_exempt(&self, card: CardId) -> bool;

    /// The death-rattle minion whose stealthed copies widen the combo
    /// lethal allowance.
    fn stealth_rattler(&self) -> CardId;

    /// Priority of `card` in the hero-power table, or `None` if unknown.
    /// Higher wins; the table is curated so ties do not occur.
    fn hero_power_priority(&self, card: CardId) -> Option<u8>;

    /// Taunt minions worth spending silence on (targets for the
    /// silence-valuation adjustment).
    fn taunt_targets(&self) -> &[CardId];

    /// The early-turn opening rule table, in evaluation order.
    fn opening_rules(&self) -> &[OpeningRule];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CardInHand;

    const NEEDED: CardId = CardId(1);
    const FORBIDDEN: CardId = CardId(2);

    const RULE: OpeningRule = OpeningRule {
        turn: 2,
        requires_in_hand: &[NEEDED],
        requires_not_in_hand: &[FORBIDDEN],
        mana_exactly: Some(2),
        max_enemy_weapon_attack: Some(3),
        min_enemy_weapon_attack: None,
        adjustments: &[],
        exclusive: true,
    };

    #[test]
    fn rule_matches_only_its_exact_conditions() {
        let base = BoardSnapshot::builder()
            .turn(2)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0));

        assert!(RULE.matches(&base.build()));

        let wrong_turn = BoardSnapshot::builder()
            .turn(3)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0))
            .build();
        assert!(!RULE.matches(&wrong_turn));

        let wrong_mana = BoardSnapshot::builder()
            .turn(2)
            .mana(3, 3)
            .card(CardInHand::spell(NEEDED, 0))
            .build();
        assert!(!RULE.matches(&wrong_mana));

        let holding_forbidden = BoardSnapshot::builder()
            .turn(2)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0))
            .card(CardInHand::spell(FORBIDDEN, 0))
            .build();
        assert!(!RULE.matches(&holding_forbidden));
    }

    #[test]
    fn weapon_guard_blocks_on_big_weapons_only() {
        let no_weapon = BoardSnapshot::builder()
            .turn(2)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0))
            .build();
        assert!(RULE.matches(&no_weapon));

        let small_weapon = BoardSnapshot::builder()
            .turn(2)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0))
            .enemy_weapon_attack(2)
            .build();
        assert!(RULE.matches(&small_weapon));

        let big_weapon = BoardSnapshot::builder()
            .turn(2)
            .mana(2, 2)
            .card(CardInHand::spell(NEEDED, 0))
            .enemy_weapon_attack(3)
            .build();
        assert!(!RULE.matches(&big_weapon));
    }
}
