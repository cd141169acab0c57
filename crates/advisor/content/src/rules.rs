//! The profile's tactic rule tables.

use advisor_core::{CardId, ComboDescriptor, OpeningRule, RulesOracle};

use crate::{cards, openings};

/// Standard rule set for the ramp-combo play style.
///
/// The burst combo is Force of Nature into Savage Roar; Shade of Naxxramas
/// is the stealth attacker the lethal evaluator credits in advance.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl StandardRules {
    /// Minions whose deathrattle leaves a body behind, so losing them in a
    /// trade still keeps an attacker on the board.
    const TRADE_EXEMPT: &'static [CardId] = &[
        cards::HARVEST_GOLEM,
        cards::HAUNTED_CREEPER,
        cards::PILOTED_SHREDDER,
    ];

    /// Hero powers by pick priority, best first.
    const HERO_POWER_PRIORITY: &'static [(CardId, u8)] = &[
        (cards::STEADY_SHOT, 8),
        (cards::SHAPESHIFT, 7),
        (cards::LIFE_TAP, 6),
        (cards::FIREBLAST, 5),
        (cards::REINFORCE, 4),
        (cards::ARMOR_UP, 3),
        (cards::LESSER_HEAL, 2),
        (cards::DAGGER_MASTERY, 1),
    ];

    /// Taunts of cost two or more, worth a silence from Keeper of the Grove.
    const TAUNT_TARGETS: &'static [CardId] = &[
        cards::SENJIN_SHIELDMASTA,
        cards::SLUDGE_BELCHER,
        cards::IRONFUR_GRIZZLY,
        cards::FEN_CREEPER,
        cards::ANCIENT_OF_WAR,
    ];

    pub const fn new() -> Self {
        Self
    }
}

impl RulesOracle for StandardRules {
    fn combo(&self) -> ComboDescriptor {
        ComboDescriptor::new(cards::FORCE_OF_NATURE, cards::SAVAGE_ROAR)
    }

    fn is_trade_exempt(&self, card: CardId) -> bool {
        Self::TRADE_EXEMPT.contains(&card)
    }

    fn stealth_rattler(&self) -> CardId {
        cards::SHADE_OF_NAXXRAMAS
    }

    fn hero_power_priority(&self, card: CardId) -> Option<u8> {
        Self::HERO_POWER_PRIORITY
            .iter()
            .find(|(id, _)| *id == card)
            .map(|(_, priority)| *priority)
    }

    fn taunt_targets(&self) -> &[CardId] {
        Self::TAUNT_TARGETS
    }

    fn opening_rules(&self) -> &[OpeningRule] {
        openings::OPENING_RULES
    }
}
