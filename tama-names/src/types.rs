//! Name source and resolution result types.

use crate::error::NameError;

/// Where a new pet's name should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// The player typed a name. Blank names are rejected at creation.
    Manual(String),
    /// Ask the configured provider for a random name.
    Random,
}

/// Outcome of asking a provider for a name.
///
/// Creation never stops on a failure; it substitutes a fallback via
/// [`NameResolution::into_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// The provider returned a usable name.
    Resolved(String),
    /// The provider failed.
    Failed {
        /// Why, for logging.
        reason: String,
    },
}

impl NameResolution {
    /// Whether the provider failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The concrete name to use, substituting `fallback` on failure.
    #[must_use]
    pub fn into_name(self, fallback: &str) -> String {
        match self {
            Self::Resolved(name) => name,
            Self::Failed { .. } => fallback.to_string(),
        }
    }
}

impl From<Result<String, NameError>> for NameResolution {
    fn from(result: Result<String, NameError>) -> Self {
        match result {
            Ok(name) => Self::Resolved(name),
            Err(err) => Self::Failed {
                reason: err.to_string(),
            },
        }
    }
}
