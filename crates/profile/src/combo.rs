//! Burst-combo feasibility checks.

use advisor_core::{BoardSnapshot, ComboDescriptor};

/// True if both combo halves are in hand.
pub fn combo_in_hand(snapshot: &BoardSnapshot, combo: ComboDescriptor) -> bool {
    snapshot.has_card_in_hand(combo.enabler) && snapshot.has_card_in_hand(combo.finisher)
}

/// Combined cost of the cheapest in-hand copy of each combo half, or `None`
/// if either half is missing.
pub fn combo_cost(snapshot: &BoardSnapshot, combo: ComboDescriptor) -> Option<i32> {
    let enabler = snapshot.min_cost_in_hand(combo.enabler)?;
    let finisher = snapshot.min_cost_in_hand(combo.finisher)?;
    Some(enabler + finisher)
}

/// True if the combo can be paid for with this turn's mana.
pub fn affordable_now(snapshot: &BoardSnapshot, combo: ComboDescriptor) -> bool {
    combo_cost(snapshot, combo).is_some_and(|cost| snapshot.mana_available - cost >= 0)
}

/// True if the combo fits next turn's budget, modeled as one extra permanent
/// mana crystal on top of the current maximum.
pub fn affordable_next_turn(snapshot: &BoardSnapshot, combo: ComboDescriptor) -> bool {
    combo_cost(snapshot, combo).is_some_and(|cost| snapshot.max_mana + 1 - cost >= 0)
}

/// Mana left this turn after reserving for the combo. Full budget when the
/// combo is not in hand.
pub fn remaining_mana_after_combo(snapshot: &BoardSnapshot, combo: ComboDescriptor) -> i32 {
    snapshot.mana_available - combo_cost(snapshot, combo).unwrap_or(0)
}
