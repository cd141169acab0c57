//! Core data model shared by the advisor crates.
//!
//! `advisor-core` defines the read-only match snapshot, the oracle traits
//! through which profiles consume static card knowledge, and the bounded
//! modifier output contract. Everything here is pure data; the evaluation
//! heuristics live in the `profile` crate and the concrete tables in
//! `advisor-content`.
pub mod config;
pub mod env;
pub mod params;
pub mod state;
pub use config::ProfileConfig;
pub use env::{
    AdjustmentSlot, CardAdjustment, CatalogOracle, ComboDescriptor, Env, OpeningRule, OracleError,
    ProfileEnv, RulesOracle,
};
pub use params::{Modifier, ProfileParameters};
pub use state::{
    BoardSide, BoardSnapshot, BoardSnapshotBuilder, CardId, CardInHand, CardType, Hand, HeroState,
    Minion, MinionFlags,
};
