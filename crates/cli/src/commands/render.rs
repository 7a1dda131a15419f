use intake_core::config::AppConfig;
use intake_core::{Cadence, Product};
use rust_decimal::Decimal;
use serde::Serialize;

/// Product as shown on a detail/checkout page for one billing cadence.
#[derive(Debug, Serialize)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub cadence: Cadence,
    pub price: Decimal,
    pub billed_total: Decimal,
    pub bundle_id: &'a str,
    pub category_label: Option<&'static str>,
    pub img_url: String,
    pub thumbnail_url: String,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a Product, cadence: Cadence, config: &AppConfig) -> Self {
        Self {
            product,
            cadence,
            price: product.price(cadence),
            billed_total: product.billed_total(cadence),
            bundle_id: product.bundle_id(cadence),
            category_label: product.category.map(|category| category.label()),
            img_url: config.assets.resolve(&product.img),
            thumbnail_url: config.assets.resolve(&product.thumbnail),
        }
    }
}

pub fn format_price(amount: Decimal, config: &AppConfig) -> String {
    format!("{}{}", config.display.currency_symbol, amount.normalize())
}

fn cadence_suffix(cadence: Cadence) -> &'static str {
    match cadence {
        Cadence::Monthly => "/month",
        Cadence::ThreeMonthly => "/month (3-month plan)",
        Cadence::SixMonthly => "/month (6-month plan)",
    }
}

/// One-line listing entry: id, name, category label, default-cadence price.
pub fn product_line(product: &Product, config: &AppConfig) -> String {
    let cadence = config.display.default_cadence;
    let category = product.category.map(|category| category.label()).unwrap_or("Uncategorized");
    let mut line = format!(
        "- {}: {} [{}] {}{}",
        product.id,
        product.name,
        category,
        format_price(product.price(cadence), config),
        cadence_suffix(cadence)
    );
    if product.is_popular() {
        line.push_str(" (popular)");
    }
    if !product.is_available() {
        line.push_str(" (out of stock)");
    }
    line
}

pub fn product_lines<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    config: &AppConfig,
) -> String {
    let lines: Vec<String> =
        products.into_iter().map(|product| product_line(product, config)).collect();
    if lines.is_empty() {
        return "no products".to_string();
    }
    lines.join("\n")
}

pub fn detail_text(detail: &ProductDetail<'_>, config: &AppConfig) -> String {
    let product = detail.product;
    let mut lines = vec![
        format!("{} ({})", product.name, product.id),
        product.description.clone(),
        format!("- category: {}", detail.category_label.unwrap_or("Uncategorized")),
        format!(
            "- price: {}{} (billed {} per cycle)",
            format_price(detail.price, config),
            cadence_suffix(detail.cadence),
            format_price(detail.billed_total, config)
        ),
        format!("- bundle: {}", detail.bundle_id),
        format!("- image: {}", detail.img_url),
        "- features:".to_string(),
    ];
    lines.extend(product.features.iter().map(|feature| format!("  - {feature}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use intake_core::config::AppConfig;
    use intake_core::{catalog, get_by_id, Cadence};
    use rust_decimal::Decimal;

    use super::{format_price, product_line, product_lines, ProductDetail};

    #[test]
    fn price_is_rendered_without_trailing_zeros() {
        let config = AppConfig::default();
        assert_eq!(format_price(Decimal::new(34900, 2), &config), "£349");
        assert_eq!(format_price(Decimal::new(17950, 2), &config), "£179.5");
    }

    #[test]
    fn popular_products_are_flagged_in_listing() {
        let config = AppConfig::default();
        let product = get_by_id("mounjaro-injection").expect("mounjaro is listed");

        assert_eq!(
            product_line(product, &config),
            "- mounjaro-injection: Mounjaro Injection [Weight Loss] £399/month (popular)"
        );
    }

    #[test]
    fn empty_listing_says_so() {
        let config = AppConfig::default();
        assert_eq!(product_lines(std::iter::empty(), &config), "no products");
        assert_eq!(product_lines(catalog().products(), &config).lines().count(), 3);
    }

    #[test]
    fn detail_uses_requested_cadence() {
        let config = AppConfig::default();
        let product = get_by_id("methylcobalamin-injection").expect("b12 is listed");
        let detail = ProductDetail::new(product, Cadence::SixMonthly, &config);

        assert_eq!(detail.price, Decimal::new(349, 0));
        assert_eq!(detail.billed_total, Decimal::new(2094, 0));
        assert_eq!(detail.bundle_id, "methylcobalamin-injection-six-monthly");
        assert_eq!(detail.category_label, Some("Wellness"));
        assert_eq!(detail.img_url, "/assets/images/products/methylcobalamin-injection.png");
    }
}
