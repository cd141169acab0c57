//! Next-turn lethal-range heuristic.
//!
//! Advisory only: a positive result biases the agent toward aggression, it
//! never forces an action. The bias is kept conservative, so missing oracles
//! or ambiguous inputs degrade to `false`.

use advisor_core::{
    BoardSnapshot, CatalogOracle, ComboDescriptor, OracleError, ProfileConfig, ProfileEnv,
};

use crate::{combo, sequence, survival};

/// Damage from the burn spells castable this turn, reserving mana for the
/// combo when it is payable right now.
pub fn playable_spell_damage<C>(snapshot: &BoardSnapshot, catalog: &C, combo: ComboDescriptor) -> i32
where
    C: CatalogOracle + ?Sized,
{
    let budget = if combo::affordable_now(snapshot, combo) {
        combo::remaining_mana_after_combo(snapshot, combo)
    } else {
        snapshot.mana_available
    };
    let selected = sequence::playable_spell_sequence(&snapshot.hand, catalog, budget);
    sequence::sequence_damage(&selected.cards, catalog, snapshot.spell_power)
}

/// Burn damage still in hand after this turn's castable sequence.
pub fn remaining_blast_damage<C>(
    snapshot: &BoardSnapshot,
    catalog: &C,
    combo: ComboDescriptor,
) -> i32
where
    C: CatalogOracle + ?Sized,
{
    sequence::total_blast_damage(&snapshot.hand, catalog, snapshot.spell_power)
        - playable_spell_damage(snapshot, catalog, combo)
}

/// Whether the enemy hero is plausibly within reach by the end of next turn.
///
/// Missing oracles degrade to `false` rather than failing the host's
/// decision loop.
pub fn lethal_range_next_turn(
    snapshot: &BoardSnapshot,
    env: &ProfileEnv<'_>,
    config: &ProfileConfig,
) -> bool {
    match try_lethal_range_next_turn(snapshot, env, config) {
        Ok(in_range) => in_range,
        Err(error) => {
            tracing::warn!("lethal check unavailable, assuming out of range: {error}");
            false
        }
    }
}

fn try_lethal_range_next_turn(
    snapshot: &BoardSnapshot,
    env: &ProfileEnv<'_>,
    config: &ProfileConfig,
) -> Result<bool, OracleError> {
    // An un-bypassable blocker invalidates every face-damage projection.
    if snapshot.has_enemy_taunt() {
        return Ok(false);
    }

    let catalog = env.catalog()?;
    let rules = env.rules()?;
    let combo = rules.combo();

    let effective_health = snapshot.effective_enemy_health();
    let minion_attack = snapshot.minion_attack_this_turn();

    if combo::affordable_next_turn(snapshot, combo) {
        let projection =
            survival::project_survivors(&snapshot.friendly_minions, &snapshot.enemy_minions, rules);
        let stealthed =
            snapshot.stealthed_copies_on_board(rules.stealth_rattler()) as i32;
        let playable_minions =
            sequence::playable_minion_count(&snapshot.hand, snapshot.mana_available) as i32;

        let allowance = config.combo_reach_allowance
            + config.stealth_rattler_bonus * stealthed
            + projection.total_attack()
            + 2 * projection.count() as i32
            + 2 * playable_minions;

        if effective_health - minion_attack <= allowance {
            tracing::debug!(
                effective_health,
                minion_attack,
                allowance,
                "combo reaches lethal range next turn"
            );
            return Ok(true);
        }
    }

    let playable_damage = playable_spell_damage(snapshot, catalog, combo);
    let remaining = remaining_blast_damage(snapshot, catalog, combo);
    let second_turn_range = effective_health - (minion_attack + playable_damage);
    if remaining >= second_turn_range {
        tracing::debug!(
            remaining,
            second_turn_range,
            "held burn covers the remaining range"
        );
        return Ok(true);
    }

    Ok(false)
}
