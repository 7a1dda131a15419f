use intake_core::config::AppConfig;
use intake_core::{catalog, ApplicationError, DomainError, ProductFilter};

use crate::commands::render::product_lines;
use crate::commands::CommandResult;

#[derive(Clone, Debug, Default)]
pub struct ListArgs<'a> {
    pub category: Option<&'a str>,
    pub availability: Option<&'a str>,
    pub product_type: Option<&'a str>,
}

impl ListArgs<'_> {
    fn to_filter(&self) -> Result<ProductFilter, DomainError> {
        Ok(ProductFilter {
            category: self.category.map(str::parse).transpose()?,
            availability: self.availability.map(str::parse).transpose()?,
            product_type: self.product_type.map(str::parse).transpose()?,
        })
    }
}

pub fn run(config: &AppConfig, args: &ListArgs<'_>, json_output: bool) -> CommandResult {
    let filter = match args.to_filter() {
        Ok(filter) => filter,
        Err(error) => return CommandResult::from_error("list", &ApplicationError::from(error)),
    };
    let products = catalog().filter(&filter);

    if json_output {
        return CommandResult::data("list", products);
    }

    CommandResult::text(product_lines(products, config))
}
