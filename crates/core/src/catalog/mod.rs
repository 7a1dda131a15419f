//! Read-only product catalog for the intake checkout flow.
//!
//! The process-wide catalog is built once, on first access, from the literal
//! product list in [`data`] and is never mutated afterwards.

mod data;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::domain::{Availability, Product, ProductCategory, ProductType};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Listing criteria; unset fields match every product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    pub availability: Option<Availability>,
    pub product_type: Option<ProductType>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |category| product.category == Some(category))
            && self.availability.map_or(true, |availability| product.availability == availability)
            && self.product_type.map_or(true, |product_type| product.product_type == product_type)
    }
}

/// Products held in ascending `order`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: sort_by_order(products) }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id.as_str() == id)
    }

    pub fn popular(&self) -> Vec<&Product> {
        // Filtering keeps catalog order; the re-sort is a no-op retained for parity.
        sort_by_order(self.products.iter().filter(|product| product.is_popular()))
    }

    /// Distinct categories in the order they first appear in the catalog.
    pub fn available_categories(&self) -> Vec<ProductCategory> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter_map(|product| product.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn in_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.filter(&ProductFilter { category: Some(category), ..ProductFilter::default() })
    }

    /// Products matching `filter`, in catalog order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|product| filter.matches(product)).collect()
    }
}

/// Stable ascending sort by `order`. Products without an order sort after
/// every product that declares one.
pub fn sort_by_order<P>(products: impl IntoIterator<Item = P>) -> Vec<P>
where
    P: Borrow<Product>,
{
    let mut sorted: Vec<P> = products.into_iter().collect();
    sorted.sort_by_key(|product| order_key(product.borrow()));
    sorted
}

fn order_key(product: &Product) -> (bool, u32) {
    match product.order {
        Some(order) => (false, order),
        None => (true, 0),
    }
}

pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let catalog = Catalog::new(data::products());
        debug!(
            event_name = "catalog.loaded",
            product_count = catalog.len(),
            "product catalog initialized"
        );
        catalog
    })
}

pub fn get_by_id(id: &str) -> Option<&'static Product> {
    catalog().get_by_id(id)
}

pub fn get_popular() -> Vec<&'static Product> {
    catalog().popular()
}

pub fn get_available_categories() -> Vec<ProductCategory> {
    catalog().available_categories()
}
