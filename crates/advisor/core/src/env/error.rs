//! Oracle availability errors.

/// Error returned when a required oracle was not provided to the [`Env`].
///
/// [`Env`]: super::Env
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("catalog oracle not available")]
    CatalogNotAvailable,

    #[error("rules oracle not available")]
    RulesNotAvailable,
}
