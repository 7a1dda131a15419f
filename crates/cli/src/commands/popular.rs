use intake_core::config::AppConfig;
use intake_core::get_popular;

use crate::commands::render::product_lines;
use crate::commands::CommandResult;

pub fn run(config: &AppConfig, json_output: bool) -> CommandResult {
    let popular = get_popular();

    if json_output {
        return CommandResult::data("popular", popular);
    }

    CommandResult::text(product_lines(popular, config))
}
