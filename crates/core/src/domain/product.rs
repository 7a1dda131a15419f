use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cadence::{ByCadence, Cadence};
use crate::domain::category::ProductCategory;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to the intake quiz attached to a product.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizRef(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_stock" => Ok(Self::InStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(DomainError::UnknownAvailability(other.to_string())),
        }
    }
}

/// Delivery form of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Injection,
    Tablet,
    Topical,
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "injection" => Ok(Self::Injection),
            "tablet" => Ok(Self::Tablet),
            "topical" => Ok(Self::Topical),
            other => Err(DomainError::UnknownProductType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub img: String,
    pub thumbnail: String,
    /// Price per month of the plan, keyed by billing cadence.
    pub prices: ByCadence<Decimal>,
    pub product_bundle_ids: ByCadence<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    pub availability: Availability,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    pub features: Vec<String>,
    #[serde(default)]
    pub quiz: Option<QuizRef>,
    #[serde(default)]
    pub order: Option<u32>,
}

impl Product {
    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::InStock
    }

    pub fn price(&self, cadence: Cadence) -> Decimal {
        *self.prices.get(cadence)
    }

    pub fn bundle_id(&self, cadence: Cadence) -> &str {
        self.product_bundle_ids.get(cadence)
    }

    /// Amount charged per billing cycle: the monthly-equivalent price times the cycle length.
    pub fn billed_total(&self, cadence: Cadence) -> Decimal {
        self.price(cadence) * Decimal::from(cadence.months())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Availability, Product, ProductId, ProductType};
    use crate::domain::cadence::{ByCadence, Cadence};
    use crate::domain::category::ProductCategory;
    use crate::errors::DomainError;

    fn product() -> Product {
        Product {
            id: ProductId("semaglutide-tablet".to_string()),
            name: "Semaglutide Tablet".to_string(),
            description: "Daily oral GLP-1".to_string(),
            img: "/assets/images/products/semaglutide-tablet.png".to_string(),
            thumbnail: "/assets/images/products/semaglutide-tablet.png".to_string(),
            prices: ByCadence::new(
                Decimal::new(199, 0),
                Decimal::new(17950, 2),
                Decimal::new(159, 0),
            ),
            product_bundle_ids: ByCadence::new(
                "semaglutide-tablet-monthly".to_string(),
                "semaglutide-tablet-three-monthly".to_string(),
                "semaglutide-tablet-six-monthly".to_string(),
            ),
            popular: None,
            availability: Availability::OutOfStock,
            product_type: ProductType::Tablet,
            category: Some(ProductCategory::WeightLoss),
            features: vec!["Daily tablet".to_string()],
            quiz: None,
            order: None,
        }
    }

    #[test]
    fn absent_popular_flag_means_not_popular() {
        let mut product = product();
        assert!(!product.is_popular());

        product.popular = Some(false);
        assert!(!product.is_popular());

        product.popular = Some(true);
        assert!(product.is_popular());
    }

    #[test]
    fn billed_total_scales_monthly_equivalent_price_by_cycle_length() {
        let product = product();

        assert_eq!(product.billed_total(Cadence::Monthly), Decimal::new(199, 0));
        assert_eq!(product.billed_total(Cadence::ThreeMonthly), Decimal::new(53850, 2));
        assert_eq!(product.billed_total(Cadence::SixMonthly), Decimal::new(954, 0));
        assert_eq!(product.bundle_id(Cadence::SixMonthly), "semaglutide-tablet-six-monthly");
    }

    #[test]
    fn out_of_stock_product_is_unavailable() {
        assert!(!product().is_available());
    }

    #[test]
    fn parses_availability_and_delivery_form() {
        assert_eq!("IN_STOCK".parse::<Availability>(), Ok(Availability::InStock));
        assert_eq!("topical".parse::<ProductType>(), Ok(ProductType::Topical));
        assert_eq!(
            "capsule".parse::<ProductType>(),
            Err(DomainError::UnknownProductType("capsule".to_string()))
        );
    }

    #[test]
    fn serializes_with_checkout_field_names() {
        let json = serde_json::to_value(product()).expect("serialize product");

        assert_eq!(json["type"], "tablet");
        assert_eq!(json["availability"], "out_of_stock");
        assert_eq!(json["category"], "weight-loss");
        assert_eq!(json["productBundleIds"]["threeMonthly"], "semaglutide-tablet-three-monthly");
        assert!(json["quiz"].is_null());
        assert!(json.get("popular").is_none());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let raw = r#"{
            "id": "finasteride-tablet",
            "name": "Finasteride",
            "description": "Hair loss treatment",
            "img": "/a.png",
            "thumbnail": "/a.png",
            "prices": {"monthly": "25", "threeMonthly": "22", "sixMonthly": "20"},
            "productBundleIds": {"monthly": "m", "threeMonthly": "t", "sixMonthly": "s"},
            "availability": "in_stock",
            "type": "tablet",
            "features": []
        }"#;

        let product: Product = serde_json::from_str(raw).expect("deserialize product");
        assert_eq!(product.popular, None);
        assert_eq!(product.category, None);
        assert_eq!(product.order, None);
        assert_eq!(product.quiz, None);
        assert_eq!(product.price(Cadence::SixMonthly), Decimal::new(20, 0));
    }
}
