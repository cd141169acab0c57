//! Per-turn decision weighting for the ramp-combo play style.
//!
//! Given a read-only board snapshot and the content oracles, this crate
//! produces the modifier set that biases the host's card ranking: burst
//! sequencing, combo feasibility, trade survivability, lethal-range
//! detection, hero-power priority, and the early-turn opening preferences.
//! Everything is synchronous and stateless per call.
pub mod combo;
pub mod evaluator;
pub mod hero_power;
pub mod lethal;
pub mod openings;
pub mod sequence;
pub mod survival;

pub use evaluator::ProfileEvaluator;
pub use hero_power::ChoiceError;
pub use sequence::{DamageSequence, SequenceCards};
pub use survival::SurvivalProjection;
