//! Next-turn trade survivability projection.
//!
//! Approximates which friendly attackers the opponent can remove with a
//! single trade each before our next turn. Coarse one-to-one matching:
//! each enemy attacker removes at most one survivor, scanning survivors in
//! descending current-attack order. Intentionally not an optimal assignment.

use advisor_core::{BoardSide, RulesOracle};

/// Friendly attackers projected to survive the enemy's next combat step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurvivalProjection {
    /// Projected survivors, in descending attack order.
    pub survivors: BoardSide,
}

impl SurvivalProjection {
    /// Sum of surviving attack values.
    pub fn total_attack(&self) -> i32 {
        self.survivors.iter().map(|minion| minion.attack).sum()
    }

    /// Number of survivors.
    pub fn count(&self) -> usize {
        self.survivors.len()
    }
}

/// Projects which of `friendly` survive one trade from each of `enemy`.
///
/// A survivor is removed when its health is within an enemy attacker's
/// attack value, it has no divine shield, and its identity is not
/// trade-exempt. Inputs are never mutated.
pub fn project_survivors<R>(friendly: &BoardSide, enemy: &BoardSide, rules: &R) -> SurvivalProjection
where
    R: RulesOracle + ?Sized,
{
    let mut survivors = friendly.clone();
    survivors.sort_unstable_by(|a, b| b.attack.cmp(&a.attack));

    for attacker in enemy {
        let victim = survivors.iter().position(|minion| {
            minion.health <= attacker.attack
                && !minion.has_divine_shield()
                && !rules.is_trade_exempt(minion.id)
        });
        if let Some(index) = victim {
            survivors.remove(index);
        }
    }

    SurvivalProjection { survivors }
}
