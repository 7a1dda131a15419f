pub mod cadence;
pub mod category;
pub mod product;

pub use cadence::{ByCadence, Cadence};
pub use category::{category_labels, ProductCategory};
pub use product::{Availability, Product, ProductId, ProductType, QuizRef};
