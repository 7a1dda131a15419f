pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;

pub use catalog::{
    catalog, get_available_categories, get_by_id, get_popular, sort_by_order, Catalog,
    ProductFilter,
};
pub use domain::{
    category_labels, Availability, ByCadence, Cadence, Product, ProductCategory, ProductId,
    ProductType, QuizRef,
};
pub use errors::{ApplicationError, DomainError};
