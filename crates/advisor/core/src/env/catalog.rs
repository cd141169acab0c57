//! Damage catalog oracle.

use crate::state::CardId;

/// Oracle providing base damage values for damage-dealing cards.
///
/// The catalog is static configuration: a card either has a known base
/// damage (and participates in sequencing and blast totals) or it does not.
/// Spell-power bonuses are *not* part of the catalog; they come from the
/// snapshot and are added per selected card by the sequencer.
pub trait CatalogOracle: Send + Sync {
    /// Base face damage of `card`, or `None` if the card is not a damage
    /// card tracked by this profile.
    fn spell_damage(&self, card: CardId) -> Option<i32>;
}
