//! Modifier output contract.
//!
//! The advisor's only product is a [`ProfileParameters`] value: a set of
//! bounded integer weight adjustments the host's ranking engine folds into
//! its card scores. By this workspace's convention a more positive modifier
//! makes the card *less* likely to be played; negative pushes the host
//! toward playing it.

use std::collections::BTreeMap;

use crate::state::CardId;

/// A single bounded weight adjustment, optionally scoped to a target card.
///
/// Values are clamped to `±Modifier::BOUND` on construction so nothing
/// outside the declared contract range can ever reach the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    value: i32,
    target: Option<CardId>,
}

impl Modifier {
    /// Symmetric contract bound for modifier magnitudes.
    pub const BOUND: i32 = 1000;

    /// Creates a modifier, clamping `value` into `[-BOUND, BOUND]`.
    pub fn new(value: i32) -> Self {
        Self {
            value: value.clamp(-Self::BOUND, Self::BOUND),
            target: None,
        }
    }

    /// Creates a modifier scoped to a secondary target identity
    /// (e.g. "value this removal specifically against that minion").
    pub fn targeted(value: i32, target: CardId) -> Self {
        Self {
            value: value.clamp(-Self::BOUND, Self::BOUND),
            target: Some(target),
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> Option<CardId> {
        self.target
    }
}

/// Full set of weight adjustments emitted for one turn.
///
/// Global category modifiers apply to every card of the category; per-card
/// entries are added on top by the host. Setting a per-card entry replaces
/// any previous entry for that card (last writer wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileParameters {
    /// Applied to all spells.
    pub global_spells: Modifier,
    /// Applied to all minions.
    pub global_minions: Modifier,
    /// Applied to the enemy hero's health value; higher means more
    /// aggressive play.
    pub global_aggro: Modifier,
    /// Applied to the friendly hero's health value; higher means more
    /// hp-conservative play.
    pub global_defense: Modifier,
    /// Applied to card-draw value.
    pub global_draw: Modifier,
    /// Applied to weapon attack value.
    pub global_weapons: Modifier,

    spells: BTreeMap<CardId, Modifier>,
    minions: BTreeMap<CardId, Modifier>,
    targeted_minions: Vec<(CardId, Modifier)>,
}

impl ProfileParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the modifier for a specific spell.
    pub fn set_spell_modifier(&mut self, card: CardId, modifier: Modifier) {
        self.spells.insert(card, modifier);
    }

    /// Sets (or replaces) the modifier for a specific minion.
    pub fn set_minion_modifier(&mut self, card: CardId, modifier: Modifier) {
        self.minions.insert(card, modifier);
    }

    pub fn spell_modifier(&self, card: CardId) -> Option<Modifier> {
        self.spells.get(&card).copied()
    }

    pub fn minion_modifier(&self, card: CardId) -> Option<Modifier> {
        self.minions.get(&card).copied()
    }

    /// Iterates per-spell modifiers in card-id order.
    pub fn spell_modifiers(&self) -> impl Iterator<Item = (CardId, Modifier)> + '_ {
        self.spells.iter().map(|(card, modifier)| (*card, *modifier))
    }

    /// Iterates per-minion modifiers in card-id order.
    pub fn minion_modifiers(&self) -> impl Iterator<Item = (CardId, Modifier)> + '_ {
        self.minions
            .iter()
            .map(|(card, modifier)| (*card, *modifier))
    }

    /// Adds (or replaces) a target-scoped modifier for a minion.
    ///
    /// Targeted entries stack with the card's untargeted entry; the replace
    /// key is the `(card, target)` pair.
    pub fn add_targeted_minion_modifier(&mut self, card: CardId, modifier: Modifier) {
        self.targeted_minions
            .retain(|(existing, entry)| *existing != card || entry.target() != modifier.target());
        self.targeted_minions.push((card, modifier));
    }

    /// Iterates target-scoped minion modifiers in insertion order.
    pub fn targeted_minion_modifiers(&self) -> impl Iterator<Item = (CardId, Modifier)> + '_ {
        self.targeted_minions
            .iter()
            .map(|(card, modifier)| (*card, *modifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_clamps_to_contract_bound() {
        assert_eq!(Modifier::new(5000).value(), Modifier::BOUND);
        assert_eq!(Modifier::new(-5000).value(), -Modifier::BOUND);
        assert_eq!(Modifier::new(150).value(), 150);
    }

    #[test]
    fn targeted_modifier_keeps_its_target() {
        let target = CardId(42);
        let modifier = Modifier::targeted(20, target);
        assert_eq!(modifier.value(), 20);
        assert_eq!(modifier.target(), Some(target));
    }

    #[test]
    fn targeted_entries_stack_per_target_and_replace_per_pair() {
        let card = CardId(7);
        let mut params = ProfileParameters::new();
        params.add_targeted_minion_modifier(card, Modifier::targeted(20, CardId(1)));
        params.add_targeted_minion_modifier(card, Modifier::targeted(20, CardId(2)));
        assert_eq!(params.targeted_minion_modifiers().count(), 2);

        params.add_targeted_minion_modifier(card, Modifier::targeted(35, CardId(1)));
        assert_eq!(params.targeted_minion_modifiers().count(), 2);
        let updated = params
            .targeted_minion_modifiers()
            .find(|(_, modifier)| modifier.target() == Some(CardId(1)))
            .unwrap();
        assert_eq!(updated.1.value(), 35);
    }

    #[test]
    fn per_card_entries_replace_previous_values() {
        let card = CardId(7);
        let mut params = ProfileParameters::new();
        params.set_minion_modifier(card, Modifier::new(60));
        params.set_minion_modifier(card, Modifier::new(-150));
        assert_eq!(params.minion_modifier(card), Some(Modifier::new(-150)));
        assert_eq!(params.minion_modifiers().count(), 1);
    }
}
