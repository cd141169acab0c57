//! Top-level per-turn parameter evaluation.

use advisor_core::{BoardSnapshot, Modifier, ProfileConfig, ProfileEnv, ProfileParameters};
use advisor_content::cards;

use crate::{combo, lethal, openings};

/// Produces the full modifier set for one turn.
///
/// Stateless across calls: every evaluation is a pure function of the
/// snapshot, the oracles, and the held configuration.
#[derive(Clone, Debug, Default)]
pub struct ProfileEvaluator {
    config: ProfileConfig,
}

impl ProfileEvaluator {
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Evaluates the snapshot into a fresh set of parameters.
    ///
    /// A missing rules oracle degrades to the baseline nudges alone.
    pub fn evaluate(&self, snapshot: &BoardSnapshot, env: &ProfileEnv<'_>) -> ProfileParameters {
        let mut params = ProfileParameters::new();

        // Standing per-card nudges, independent of board state.
        params.set_spell_modifier(cards::THE_COIN, Modifier::new(150));
        params.set_spell_modifier(cards::INNERVATE, Modifier::new(180));
        params.set_spell_modifier(cards::SWIPE, Modifier::new(80));
        params.set_minion_modifier(cards::KEEPER_OF_THE_GROVE, Modifier::new(60));

        let rules = match env.rules() {
            Ok(rules) => rules,
            Err(error) => {
                tracing::warn!("evaluation degraded to baseline nudges: {error}");
                return params;
            }
        };
        let combo_pair = rules.combo();

        // Hold Thaurissan while the combo (or most of it) is in hand.
        if combo::combo_in_hand(snapshot, combo_pair)
            || (snapshot.has_card_in_hand(combo_pair.enabler) && snapshot.hand.len() > 4)
        {
            params.set_minion_modifier(cards::EMPEROR_THAURISSAN, Modifier::new(-150));
        }

        // A spare enabler is not combo material; let one go.
        if snapshot.count_in_hand(combo_pair.enabler) >= 2 {
            params.set_spell_modifier(combo_pair.enabler, Modifier::new(60));
        }

        if lethal::lethal_range_next_turn(snapshot, env, &self.config) {
            tracing::debug!(turn = snapshot.turn, "lethal in range, shifting to aggression");
            params.global_aggro = Modifier::new(200);
        }

        if self.should_draw_cards(snapshot) {
            params.set_minion_modifier(cards::ANCIENT_OF_LORE, Modifier::new(-100));
            params.global_draw = Modifier::new(150);
        } else {
            params.global_draw = Modifier::new(50);
        }

        openings::apply_opening_rules(snapshot, rules, &mut params);

        // Value silence specifically against taunts worth removing.
        for &target in rules.taunt_targets() {
            params.add_targeted_minion_modifier(
                cards::KEEPER_OF_THE_GROVE,
                Modifier::targeted(20, target),
            );
        }

        params
    }

    fn should_draw_cards(&self, snapshot: &BoardSnapshot) -> bool {
        if snapshot.has_card_in_hand(cards::ANCIENT_OF_LORE) {
            return true;
        }
        snapshot.minions_in_hand() < 2
            && snapshot.mana_available > 2
            && snapshot.own_hero_power == Some(cards::LIFE_TAP)
    }
}

#[cfg(test)]
mod tests {
    use advisor_core::{CardInHand, Env, RulesOracle};
    use advisor_content::{DamageCatalog, StandardRules};

    use super::*;

    const CATALOG: DamageCatalog = DamageCatalog::new();
    const RULES: StandardRules = StandardRules::new();

    fn env() -> ProfileEnv<'static> {
        Env::with_all(&CATALOG, &RULES).into_profile_env()
    }

    fn evaluator() -> ProfileEvaluator {
        ProfileEvaluator::new(ProfileConfig::default())
    }

    #[test]
    fn baseline_nudges_are_always_present() {
        let params = evaluator().evaluate(&BoardSnapshot::default(), &env());
        assert_eq!(params.spell_modifier(cards::THE_COIN), Some(Modifier::new(150)));
        assert_eq!(params.spell_modifier(cards::INNERVATE), Some(Modifier::new(180)));
        assert_eq!(params.spell_modifier(cards::SWIPE), Some(Modifier::new(80)));
        assert_eq!(
            params.minion_modifier(cards::KEEPER_OF_THE_GROVE),
            Some(Modifier::new(60))
        );
    }

    #[test]
    fn combo_in_hand_holds_thaurissan() {
        let snapshot = BoardSnapshot::builder()
            .card(CardInHand::spell(cards::FORCE_OF_NATURE, 6))
            .card(CardInHand::spell(cards::SAVAGE_ROAR, 3))
            .build();
        let params = evaluator().evaluate(&snapshot, &env());
        assert_eq!(
            params.minion_modifier(cards::EMPEROR_THAURISSAN),
            Some(Modifier::new(-150))
        );

        let without = evaluator().evaluate(&BoardSnapshot::default(), &env());
        assert_eq!(without.minion_modifier(cards::EMPEROR_THAURISSAN), None);
    }

    #[test]
    fn lone_enabler_in_a_big_hand_also_holds_thaurissan() {
        let mut builder = BoardSnapshot::builder().card(CardInHand::spell(cards::FORCE_OF_NATURE, 6));
        for _ in 0..4 {
            builder = builder.card(CardInHand::minion(cards::HAUNTED_CREEPER, 2));
        }
        let params = evaluator().evaluate(&builder.build(), &env());
        assert_eq!(
            params.minion_modifier(cards::EMPEROR_THAURISSAN),
            Some(Modifier::new(-150))
        );
    }

    #[test]
    fn double_enabler_releases_one_copy() {
        let snapshot = BoardSnapshot::builder()
            .card(CardInHand::spell(cards::FORCE_OF_NATURE, 6))
            .card(CardInHand::spell(cards::FORCE_OF_NATURE, 6))
            .build();
        let params = evaluator().evaluate(&snapshot, &env());
        assert_eq!(
            params.spell_modifier(cards::FORCE_OF_NATURE),
            Some(Modifier::new(60))
        );
    }

    #[test]
    fn aggro_fires_exactly_when_lethal_is_in_range() {
        let in_range = BoardSnapshot::builder()
            .card(CardInHand::spell(cards::FORCE_OF_NATURE, 6))
            .card(CardInHand::spell(cards::SAVAGE_ROAR, 3))
            .mana(9, 9)
            .enemy_hero(10, 0)
            .build();
        // One typed env, converted per call.
        let typed = Env::with_all(&CATALOG, &RULES);
        let params = evaluator().evaluate(&in_range, &typed.as_profile_env());
        assert!(lethal::lethal_range_next_turn(
            &in_range,
            &typed.as_profile_env(),
            &ProfileConfig::default()
        ));
        assert_eq!(params.global_aggro, Modifier::new(200));

        let out_of_range = BoardSnapshot::builder()
            .mana(9, 9)
            .enemy_hero(30, 10)
            .build();
        let quiet = evaluator().evaluate(&out_of_range, &env());
        assert_eq!(quiet.global_aggro, Modifier::default());
    }

    #[test]
    fn ancient_of_lore_forces_the_draw_posture() {
        let snapshot = BoardSnapshot::builder()
            .card(CardInHand::minion(cards::ANCIENT_OF_LORE, 7))
            .build();
        let params = evaluator().evaluate(&snapshot, &env());
        assert_eq!(
            params.minion_modifier(cards::ANCIENT_OF_LORE),
            Some(Modifier::new(-100))
        );
        assert_eq!(params.global_draw, Modifier::new(150));

        let quiet = evaluator().evaluate(&BoardSnapshot::default(), &env());
        assert_eq!(quiet.global_draw, Modifier::new(50));
    }

    #[test]
    fn life_tap_with_an_empty_curve_wants_draw() {
        let snapshot = BoardSnapshot::builder()
            .card(CardInHand::minion(cards::PILOTED_SHREDDER, 4))
            .card(CardInHand::spell(cards::SWIPE, 4))
            .mana(5, 5)
            .own_hero_power(cards::LIFE_TAP)
            .build();
        let params = evaluator().evaluate(&snapshot, &env());
        assert_eq!(params.global_draw, Modifier::new(150));

        // Same hand, wrong hero power.
        let other = BoardSnapshot::builder()
            .card(CardInHand::minion(cards::PILOTED_SHREDDER, 4))
            .card(CardInHand::spell(cards::SWIPE, 4))
            .mana(5, 5)
            .own_hero_power(cards::ARMOR_UP)
            .build();
        let quiet = evaluator().evaluate(&other, &env());
        assert_eq!(quiet.global_draw, Modifier::new(50));
    }

    #[test]
    fn opening_rules_override_the_innervate_baseline() {
        let snapshot = BoardSnapshot::builder()
            .turn(1)
            .mana(1, 1)
            .card(CardInHand::spell(cards::INNERVATE, 0))
            .build();
        let params = evaluator().evaluate(&snapshot, &env());
        assert_eq!(
            params.spell_modifier(cards::INNERVATE),
            Some(Modifier::new(500))
        );
    }

    #[test]
    fn silence_is_valued_against_every_configured_taunt() {
        let rules = StandardRules::new();
        let params = evaluator().evaluate(&BoardSnapshot::default(), &env());

        let targeted: Vec<_> = params
            .targeted_minion_modifiers()
            .filter(|(card, _)| *card == cards::KEEPER_OF_THE_GROVE)
            .collect();
        assert_eq!(targeted.len(), rules.taunt_targets().len());
        for (_, modifier) in targeted {
            assert_eq!(modifier.value(), 20);
            assert!(modifier.target().is_some());
        }
        // The untargeted baseline entry is untouched.
        assert_eq!(
            params.minion_modifier(cards::KEEPER_OF_THE_GROVE),
            Some(Modifier::new(60))
        );
    }

    #[test]
    fn missing_rules_oracle_degrades_to_baseline() {
        let empty: ProfileEnv<'_> = Env::empty();
        let params = evaluator().evaluate(&BoardSnapshot::default(), &empty);
        assert_eq!(params.spell_modifier(cards::THE_COIN), Some(Modifier::new(150)));
        assert_eq!(params.global_aggro, Modifier::default());
        assert_eq!(params.targeted_minion_modifiers().count(), 0);
    }
}
