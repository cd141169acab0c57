//! Compiled-in content for the ramp-combo profile.
//!
//! This crate houses the static knowledge the evaluation engine consumes:
//! - card identity constants
//! - the burn-spell damage catalog
//! - the combo descriptor, trade exemptions, and hero-power priorities
//! - the early-turn opening rule tables
//!
//! Content implements the oracle traits from `advisor-core` and never
//! appears in snapshot state.

pub mod cards;
pub mod catalog;
pub mod openings;
pub mod rules;

pub use catalog::DamageCatalog;
pub use rules::StandardRules;
