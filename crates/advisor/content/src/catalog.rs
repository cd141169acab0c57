//! Compiled-in damage catalog.

use advisor_core::{CardId, CatalogOracle};

use crate::cards;

/// Base damage table for the profile's burn spells.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageCatalog;

impl DamageCatalog {
    const SPELL_DAMAGE: &'static [(CardId, i32)] =
        &[(cards::SWIPE, 4), (cards::LIVING_ROOTS, 2)];

    pub const fn new() -> Self {
        Self
    }
}

impl CatalogOracle for DamageCatalog {
    fn spell_damage(&self, card: CardId) -> Option<i32> {
        Self::SPELL_DAMAGE
            .iter()
            .find(|(id, _)| *id == card)
            .map(|(_, damage)| *damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_knows_only_burn_spells() {
        let catalog = DamageCatalog::new();
        assert_eq!(catalog.spell_damage(cards::SWIPE), Some(4));
        assert_eq!(catalog.spell_damage(cards::LIVING_ROOTS), Some(2));
        assert_eq!(catalog.spell_damage(cards::INNERVATE), None);
    }
}
