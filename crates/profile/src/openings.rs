//! Early-turn opening rule dispatch.

use advisor_core::{AdjustmentSlot, BoardSnapshot, Modifier, ProfileParameters, RulesOracle};

/// Applies every matching opening rule for the snapshot's turn, in table
/// order. An exclusive match ends the scan.
pub fn apply_opening_rules<R>(
    snapshot: &BoardSnapshot,
    rules: &R,
    params: &mut ProfileParameters,
) where
    R: RulesOracle + ?Sized,
{
    for rule in rules.opening_rules() {
        if !rule.matches(snapshot) {
            continue;
        }
        tracing::debug!(turn = snapshot.turn, exclusive = rule.exclusive, "opening rule matched");
        for adjustment in rule.adjustments {
            let modifier = Modifier::new(adjustment.value);
            match adjustment.slot {
                AdjustmentSlot::Spells => params.set_spell_modifier(adjustment.card, modifier),
                AdjustmentSlot::Minions => params.set_minion_modifier(adjustment.card, modifier),
            }
        }
        if rule.exclusive {
            break;
        }
    }
}
