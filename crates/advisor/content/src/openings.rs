//! Early-turn opening preference tables.
//!
//! Each table entry mirrors one branch of the per-turn hand analysis: the
//! ideal ramp openings are exclusive (finding one ends the turn's scan), the
//! fallback preferences stack. Order within the table is the evaluation
//! order.

use advisor_core::{CardAdjustment, OpeningRule};

use crate::cards;

pub const OPENING_RULES: &[OpeningRule] = &[
    // ----- turn 1 -----
    // Ramp out Shade with Innervate.
    OpeningRule {
        turn: 1,
        requires_in_hand: &[cards::INNERVATE, cards::SHADE_OF_NAXXRAMAS],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::SHADE_OF_NAXXRAMAS, -600)],
        exclusive: true,
    },
    // Coin plus Innervate reaches Shredder on turn one.
    OpeningRule {
        turn: 1,
        requires_in_hand: &[cards::THE_COIN, cards::INNERVATE, cards::PILOTED_SHREDDER],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::PILOTED_SHREDDER, -600)],
        exclusive: true,
    },
    // No ramp target: hold Innervate.
    OpeningRule {
        turn: 1,
        requires_in_hand: &[],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::spell(cards::INNERVATE, 500)],
        exclusive: false,
    },
    // Coin out Darnassus over Wild Growth.
    OpeningRule {
        turn: 1,
        requires_in_hand: &[cards::THE_COIN, cards::DARNASSUS_ASPIRANT],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::DARNASSUS_ASPIRANT, -150)],
        exclusive: false,
    },
    OpeningRule {
        turn: 1,
        requires_in_hand: &[cards::THE_COIN, cards::WILD_GROWTH],
        requires_not_in_hand: &[cards::DARNASSUS_ASPIRANT],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::spell(cards::WILD_GROWTH, -10)],
        exclusive: false,
    },
    // ----- turn 2 -----
    // Innervate out Shredder.
    OpeningRule {
        turn: 2,
        requires_in_hand: &[cards::INNERVATE, cards::PILOTED_SHREDDER],
        requires_not_in_hand: &[],
        mana_exactly: Some(2),
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::PILOTED_SHREDDER, -600)],
        exclusive: true,
    },
    // Coin out Shredder a turn early.
    OpeningRule {
        turn: 2,
        requires_in_hand: &[cards::THE_COIN, cards::PILOTED_SHREDDER],
        requires_not_in_hand: &[],
        mana_exactly: Some(3),
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::PILOTED_SHREDDER, -600)],
        exclusive: true,
    },
    // Darnassus over Wild Growth, unless the enemy holds a big weapon.
    OpeningRule {
        turn: 2,
        requires_in_hand: &[cards::WILD_GROWTH, cards::DARNASSUS_ASPIRANT],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: Some(3),
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::DARNASSUS_ASPIRANT, -100)],
        exclusive: false,
    },
    OpeningRule {
        turn: 2,
        requires_in_hand: &[cards::WILD_GROWTH, cards::DARNASSUS_ASPIRANT],
        requires_not_in_hand: &[],
        mana_exactly: None,
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: Some(3),
        adjustments: &[CardAdjustment::spell(cards::WILD_GROWTH, 10)],
        exclusive: false,
    },
    // ----- turn 3 -----
    // Both turn-3 ramps stack when the hand supports them.
    OpeningRule {
        turn: 3,
        requires_in_hand: &[cards::THE_COIN, cards::PILOTED_SHREDDER],
        requires_not_in_hand: &[],
        mana_exactly: Some(3),
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::PILOTED_SHREDDER, -600)],
        exclusive: false,
    },
    OpeningRule {
        turn: 3,
        requires_in_hand: &[cards::INNERVATE, cards::DRUID_OF_THE_CLAW],
        requires_not_in_hand: &[],
        mana_exactly: Some(3),
        max_enemy_weapon_attack: None,
        min_enemy_weapon_attack: None,
        adjustments: &[CardAdjustment::minion(cards::DRUID_OF_THE_CLAW, -600)],
        exclusive: false,
    },
];

#[cfg(test)]
mod tests {
    use advisor_core::{BoardSnapshot, CardInHand};

    use super::*;

    #[test]
    fn exclusive_rules_always_carry_adjustments() {
        for rule in OPENING_RULES.iter().filter(|rule| rule.exclusive) {
            assert!(!rule.adjustments.is_empty());
        }
    }

    #[test]
    fn innervate_shade_beats_the_hold_fallback_in_order() {
        let snapshot = BoardSnapshot::builder()
            .turn(1)
            .mana(1, 1)
            .card(CardInHand::spell(cards::INNERVATE, 0))
            .card(CardInHand::minion(cards::SHADE_OF_NAXXRAMAS, 3))
            .build();

        let first_match = OPENING_RULES
            .iter()
            .find(|rule| rule.matches(&snapshot))
            .unwrap();
        assert!(first_match.exclusive);
        assert_eq!(
            first_match.adjustments,
            &[CardAdjustment::minion(cards::SHADE_OF_NAXXRAMAS, -600)]
        );
    }
}
