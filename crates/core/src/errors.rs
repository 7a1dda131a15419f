use thiserror::Error;

use crate::domain::product::ProductId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown product category `{0}` (expected weight-loss|sexual health|wellness|hair|skin)")]
    UnknownCategory(String),
    #[error("unknown billing cadence `{0}` (expected monthly|three-monthly|six-monthly)")]
    UnknownCadence(String),
    #[error("unknown availability `{0}` (expected in_stock|out_of_stock)")]
    UnknownAvailability(String),
    #[error("unknown product type `{0}` (expected injection|tablet|topical)")]
    UnknownProductType(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("product `{0}` was not found in the catalog")]
    ProductNotFound(ProductId),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "invalid_argument",
            Self::ProductNotFound(_) => "not_found",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ProductNotFound(_) => 1,
            Self::Domain(_) | Self::Configuration(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::product::ProductId;
    use crate::errors::{ApplicationError, DomainError};

    #[test]
    fn domain_error_maps_to_invalid_argument() {
        let error = ApplicationError::from(DomainError::UnknownCategory("dental".to_owned()));

        assert_eq!(error.error_class(), "invalid_argument");
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().contains("dental"));
    }

    #[test]
    fn missing_product_maps_to_not_found() {
        let error = ApplicationError::ProductNotFound(ProductId("nonexistent-id".to_owned()));

        assert_eq!(error.error_class(), "not_found");
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "product `nonexistent-id` was not found in the catalog");
    }

    #[test]
    fn configuration_error_maps_to_config_validation() {
        let error = ApplicationError::Configuration("bad log level".to_owned());

        assert_eq!(error.error_class(), "config_validation");
        assert_eq!(error.exit_code(), 2);
    }
}
