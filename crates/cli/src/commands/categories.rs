use intake_core::{get_available_categories, ProductCategory};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct CategoryEntry {
    key: ProductCategory,
    label: &'static str,
}

pub fn run(json_output: bool) -> CommandResult {
    let entries: Vec<CategoryEntry> = get_available_categories()
        .into_iter()
        .map(|key| CategoryEntry { key, label: key.label() })
        .collect();

    if json_output {
        return CommandResult::data("categories", entries);
    }

    if entries.is_empty() {
        return CommandResult::text("no categories");
    }

    let lines: Vec<String> =
        entries.iter().map(|entry| format!("- {} ({})", entry.label, entry.key)).collect();
    CommandResult::text(lines.join("\n"))
}
