use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Closed set of product categories. Serialized keys match the web flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "weight-loss")]
    WeightLoss,
    #[serde(rename = "sexual health")]
    SexualHealth,
    #[serde(rename = "wellness")]
    Wellness,
    #[serde(rename = "hair")]
    Hair,
    #[serde(rename = "skin")]
    Skin,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::WeightLoss,
        ProductCategory::SexualHealth,
        ProductCategory::Wellness,
        ProductCategory::Hair,
        ProductCategory::Skin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::SexualHealth => "sexual health",
            Self::Wellness => "wellness",
            Self::Hair => "hair",
            Self::Skin => "skin",
        }
    }

    /// Human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::SexualHealth => "Sexual",
            Self::Wellness => "Wellness",
            Self::Hair => "Hair",
            Self::Skin => "Skin",
        }
    }
}

/// Every category key paired with its display label, in declaration order.
pub fn category_labels() -> [(ProductCategory, &'static str); 5] {
    ProductCategory::ALL.map(|category| (category, category.label()))
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "weight-loss" | "weight_loss" => Ok(Self::WeightLoss),
            "sexual health" | "sexual-health" | "sexual_health" => Ok(Self::SexualHealth),
            "wellness" => Ok(Self::Wellness),
            "hair" => Ok(Self::Hair),
            "skin" => Ok(Self::Skin),
            _ => Err(DomainError::UnknownCategory(value.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{category_labels, ProductCategory};

    #[test]
    fn every_category_has_a_distinct_non_empty_label() {
        let labels = category_labels();
        assert_eq!(labels.len(), ProductCategory::ALL.len());

        let distinct: HashSet<_> = labels.iter().map(|(_, label)| *label).collect();
        assert_eq!(distinct.len(), labels.len());
        assert!(labels.iter().all(|(_, label)| !label.is_empty()));
    }

    #[test]
    fn sexual_health_keeps_its_spaced_key() {
        assert_eq!(ProductCategory::SexualHealth.key(), "sexual health");
        assert_eq!(ProductCategory::SexualHealth.label(), "Sexual");
        assert_eq!(
            serde_json::to_value(ProductCategory::SexualHealth).expect("serialize"),
            "sexual health"
        );
        assert_eq!("sexual-health".parse::<ProductCategory>(), Ok(ProductCategory::SexualHealth));
    }

    #[test]
    fn key_parses_back_to_the_same_category() {
        for category in ProductCategory::ALL {
            assert_eq!(category.key().parse::<ProductCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("dental".parse::<ProductCategory>().is_err());
    }
}
