//! Card identity and hand entry types.

/// Opaque card identity.
///
/// Identities are assigned by the host's card database; this crate never
/// interprets the numeric value. Named constants for the cards the advisor
/// reasons about live in `advisor-content`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u32);

/// Broad card category as reported by the host snapshot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardType {
    /// A creature played to the board.
    #[default]
    Minion,
    /// A one-shot effect.
    Spell,
    /// An equippable weapon.
    Weapon,
}

/// A single card in the hand at snapshot time.
///
/// `cost` is the *current* cost, after any in-game cost reductions. The entry
/// is immutable for the duration of one evaluation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInHand {
    pub id: CardId,
    pub cost: i32,
    pub card_type: CardType,
}

impl CardInHand {
    pub const fn new(id: CardId, cost: i32, card_type: CardType) -> Self {
        Self {
            id,
            cost,
            card_type,
        }
    }

    /// Shorthand for a spell entry.
    pub const fn spell(id: CardId, cost: i32) -> Self {
        Self::new(id, cost, CardType::Spell)
    }

    /// Shorthand for a minion entry.
    pub const fn minion(id: CardId, cost: i32) -> Self {
        Self::new(id, cost, CardType::Minion)
    }

    #[inline]
    pub fn is_minion(&self) -> bool {
        self.card_type == CardType::Minion
    }

    #[inline]
    pub fn is_spell(&self) -> bool {
        self.card_type == CardType::Spell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors_set_the_card_type() {
        let spell = CardInHand::spell(CardId(1), 2);
        assert!(spell.is_spell());
        assert!(!spell.is_minion());

        let minion = CardInHand::minion(CardId(2), 3);
        assert!(minion.is_minion());
        assert!(!minion.is_spell());
    }
}
