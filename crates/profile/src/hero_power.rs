//! Hero-power pick priority.

use advisor_core::{CardId, RulesOracle};

/// Error from the hero-power selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// No offered candidate appears in the priority table; the caller must
    /// fall back to its own default.
    #[error("no offered hero power appears in the priority table")]
    NoEligibleChoice,
}

/// Picks the highest-priority candidate according to the rules table.
///
/// Ties break toward the earliest candidate, but the table is curated so
/// ties do not occur.
pub fn choose<R>(candidates: &[CardId], rules: &R) -> Result<CardId, ChoiceError>
where
    R: RulesOracle + ?Sized,
{
    let mut best: Option<(CardId, u8)> = None;
    for &candidate in candidates {
        let Some(priority) = rules.hero_power_priority(candidate) else {
            continue;
        };
        if best.is_none_or(|(_, best_priority)| priority > best_priority) {
            best = Some((candidate, priority));
        }
    }

    let (card, priority) = best.ok_or(ChoiceError::NoEligibleChoice)?;
    tracing::debug!(?card, priority, "hero power chosen");
    Ok(card)
}
