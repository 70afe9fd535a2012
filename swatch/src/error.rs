use thiserror::Error;

use swatch_color::PaletteError;
use swatch_store::StoreError;

use crate::config::ConfigError;

/// Input the user can fix by editing the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name for your color")]
    EmptyName,

    #[error("Please enter a valid hex (#RRGGBB) or RGB color")]
    NoColor,
}

/// Errors surfaced by the swatch core.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Persistence(#[from] StoreError),

    #[error("collection JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("palette dataset error: {0}")]
    Dataset(#[from] PaletteError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the failure should be shown to the user as a message
    /// rather than aborting startup.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Persistence(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_error_kinds_when_classified_then_only_input_and_storage_recover()
    {
        let validation = Error::from(ValidationError::EmptyName);
        let storage =
            Error::from(StoreError::Unavailable(String::from("offline")));
        let dataset = Error::from(PaletteError::UnnamedEntry { index: 0 });

        assert!(validation.is_user_recoverable());
        assert!(storage.is_user_recoverable());
        assert!(!dataset.is_user_recoverable());
        assert_eq!(
            validation.to_string(),
            "Please enter a name for your color"
        );
    }
}
