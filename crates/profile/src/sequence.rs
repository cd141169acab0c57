//! Greedy damage-spell sequencing under a mana budget.
//!
//! The policy is first-fit in hand order: cards are considered exactly as
//! they sit in the hand, each accepted if it fits the remaining budget.
//! This is deliberately not a cost-optimal packing; downstream weight tuning
//! depends on the bias of this exact approximation.

use advisor_core::{CardId, CatalogOracle, Hand, ProfileConfig};
use arrayvec::ArrayVec;

/// Selected card identities, bounded by hand capacity.
pub type SequenceCards = ArrayVec<CardId, { ProfileConfig::MAX_HAND_CARDS }>;

/// An ordered damage-spell selection and the budget left after it.
///
/// Invariant: the sum of selected costs never exceeds the budget the
/// sequence was built with, at every prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageSequence {
    /// Selected cards, in hand order.
    pub cards: SequenceCards,
    /// Budget remaining after the selection.
    pub mana_remaining: i32,
}

/// Selects the damage spells playable within `budget`, first-fit in hand
/// order. A non-positive budget selects nothing.
pub fn playable_spell_sequence<C>(hand: &Hand, catalog: &C, budget: i32) -> DamageSequence
where
    C: CatalogOracle + ?Sized,
{
    let mut sequence = DamageSequence {
        cards: SequenceCards::new(),
        mana_remaining: budget,
    };
    if budget <= 0 {
        return sequence;
    }

    for card in hand {
        if catalog.spell_damage(card.id).is_none() {
            continue;
        }
        if sequence.mana_remaining < card.cost {
            continue;
        }
        // Capacity matches the hand bound, so the push cannot overflow.
        let _ = sequence.cards.try_push(card.id);
        sequence.mana_remaining -= card.cost;
    }
    sequence
}

/// Total damage of an already-selected sequence. The spell-power bonus is
/// added once per selected card, not once per sequence.
pub fn sequence_damage<C>(cards: &[CardId], catalog: &C, spell_power: i32) -> i32
where
    C: CatalogOracle + ?Sized,
{
    cards
        .iter()
        .filter_map(|&card| catalog.spell_damage(card))
        .map(|damage| damage + spell_power)
        .sum()
}

/// Damage if every catalog spell in hand could be cast, ignoring mana.
pub fn total_blast_damage<C>(hand: &Hand, catalog: &C, spell_power: i32) -> i32
where
    C: CatalogOracle + ?Sized,
{
    hand.iter()
        .filter_map(|card| catalog.spell_damage(card.id))
        .map(|damage| damage + spell_power)
        .sum()
}

/// Number of minions playable within `budget`, same first-fit policy as the
/// spell sequencer but against minion costs only.
pub fn playable_minion_count(hand: &Hand, budget: i32) -> usize {
    let mut mana = budget;
    let mut count = 0;
    if budget <= 0 {
        return 0;
    }
    for card in hand {
        if !card.is_minion() || mana < card.cost {
            continue;
        }
        count += 1;
        mana -= card.cost;
    }
    count
}
