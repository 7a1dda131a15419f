use rust_decimal::Decimal;

use crate::domain::{Availability, ByCadence, Product, ProductCategory, ProductId, ProductType};

/// Master list of all products, in authoring order. Consumers see it through
/// [`crate::catalog::catalog`], which sorts it by `order`.
pub(crate) fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId("mounjaro-injection".to_string()),
            name: "Mounjaro Injection".to_string(),
            description: "Weekly GLP-1 injection for weight loss and diabetes management"
                .to_string(),
            img: asset_path("mounjaro-injection"),
            thumbnail: asset_path("mounjaro-injection"),
            prices: standard_prices(),
            product_bundle_ids: bundle_ids("mounjaro-injection"),
            popular: Some(true),
            availability: Availability::InStock,
            product_type: ProductType::Injection,
            category: Some(ProductCategory::WeightLoss),
            features: features(&[
                "Weekly subcutaneous injection",
                "GLP-1 receptor agonist",
                "Effective for weight loss",
                "Diabetes management",
                "Prescription required",
            ]),
            quiz: None,
            order: Some(1),
        },
        Product {
            id: ProductId("ozempic-injection".to_string()),
            name: "Ozempic Injection".to_string(),
            description: "Weekly GLP-1 injection for weight loss and blood sugar control"
                .to_string(),
            img: asset_path("ozempic-injection"),
            thumbnail: asset_path("ozempic-injection"),
            prices: standard_prices(),
            product_bundle_ids: bundle_ids("ozempic-injection"),
            popular: None,
            availability: Availability::InStock,
            product_type: ProductType::Injection,
            category: Some(ProductCategory::WeightLoss),
            features: features(&[
                "Weekly subcutaneous injection",
                "GLP-1 receptor agonist",
                "Weight loss support",
                "Blood sugar control",
                "Prescription required",
            ]),
            quiz: None,
            order: Some(2),
        },
        Product {
            id: ProductId("methylcobalamin-injection".to_string()),
            name: "Methylcobalamin Injection".to_string(),
            description: "Vitamin B12 injection for energy and neurological health".to_string(),
            img: asset_path("methylcobalamin-injection"),
            thumbnail: asset_path("methylcobalamin-injection"),
            prices: standard_prices(),
            product_bundle_ids: bundle_ids("methylcobalamin-injection"),
            popular: None,
            availability: Availability::InStock,
            product_type: ProductType::Injection,
            category: Some(ProductCategory::Wellness),
            features: features(&[
                "Vitamin B12 supplement",
                "Energy boost",
                "Neurological support",
                "Methylated form for better absorption",
                "Prescription required",
            ]),
            quiz: None,
            order: Some(3),
        },
    ]
}

fn standard_prices() -> ByCadence<Decimal> {
    ByCadence::new(Decimal::new(399, 0), Decimal::new(349, 0), Decimal::new(349, 0))
}

fn bundle_ids(product_id: &str) -> ByCadence<String> {
    ByCadence::new(
        format!("{product_id}-monthly"),
        format!("{product_id}-three-monthly"),
        format!("{product_id}-six-monthly"),
    )
}

fn asset_path(product_id: &str) -> String {
    format!("/assets/images/products/{product_id}.png")
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
