use intake_core::config::AppConfig;
use intake_core::{get_by_id, ApplicationError, Cadence, ProductId};
use tracing::debug;

use crate::commands::render::{detail_text, ProductDetail};
use crate::commands::CommandResult;

pub fn run(
    config: &AppConfig,
    id: &str,
    cadence: Option<&str>,
    json_output: bool,
) -> CommandResult {
    let cadence = match cadence.map(str::parse::<Cadence>).transpose() {
        Ok(cadence) => cadence.unwrap_or(config.display.default_cadence),
        Err(error) => return CommandResult::from_error("show", &ApplicationError::from(error)),
    };

    let Some(product) = get_by_id(id) else {
        debug!(event_name = "cli.show.not_found", product_id = id, "product lookup missed");
        let error = ApplicationError::ProductNotFound(ProductId(id.to_string()));
        return CommandResult::from_error("show", &error);
    };

    let detail = ProductDetail::new(product, cadence, config);
    if json_output {
        return CommandResult::data("show", detail);
    }

    CommandResult::text(detail_text(&detail, config))
}
