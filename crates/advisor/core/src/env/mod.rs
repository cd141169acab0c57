//! Traits describing read-only profile data.
//!
//! Oracles expose the static knowledge a profile is built from: the damage
//! catalog and the tactic rule tables. The [`Env`] aggregate bundles them so
//! the evaluation pipeline can access everything it needs without hard
//! coupling to concrete implementations.
mod catalog;
mod error;
mod rules;

pub use catalog::CatalogOracle;
pub use error::OracleError;
pub use rules::{AdjustmentSlot, CardAdjustment, ComboDescriptor, OpeningRule, RulesOracle};

/// Aggregates the read-only oracles required by the evaluation pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    catalog: Option<&'a C>,
    rules: Option<&'a R>,
}

pub type ProfileEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn RulesOracle + 'a>;

impl<'a, C, R> Env<'a, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, rules: Option<&'a R>) -> Self {
        Self { catalog, rules }
    }

    pub fn with_all(catalog: &'a C, rules: &'a R) -> Self {
        Self::new(Some(catalog), Some(rules))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            rules: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was provided.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the RulesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RulesNotAvailable` if no rules oracle was provided.
    pub fn rules(&self) -> Result<&'a R, OracleError> {
        self.rules.ok_or(OracleError::RulesNotAvailable)
    }
}

impl<'a, C, R> Env<'a, C, R>
where
    C: CatalogOracle + 'a,
    R: RulesOracle + 'a,
{
    /// Converts this environment into a trait-object based `ProfileEnv` (consumes self).
    pub fn into_profile_env(self) -> ProfileEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let rules: Option<&'a dyn RulesOracle> = self.rules.map(|rules| rules as _);
        Env::new(catalog, rules)
    }

    /// Converts this environment into a trait-object based `ProfileEnv` (borrows self).
    pub fn as_profile_env(&self) -> ProfileEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let rules: Option<&'a dyn RulesOracle> = self.rules.map(|rules| rules as _);
        Env::new(catalog, rules)
    }
}
