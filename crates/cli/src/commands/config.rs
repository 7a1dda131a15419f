use std::env;
use std::fs;
use std::path::Path;

use intake_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run(options: &LoadOptions) -> String {
    let config = match AppConfig::load(options.clone()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let overrides = &options.overrides;
    let source = |key_path: &str, override_flag: Option<&str>, env_keys: &[&str]| {
        if let Some(flag) = override_flag {
            return format!("override ({flag})");
        }
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let lines = [
        "effective config (source precedence: override > env > file > default):".to_string(),
        render_line(
            "display.default_cadence",
            config.display.default_cadence.key(),
            source(
                "display.default_cadence",
                overrides.default_cadence.map(|_| "--default-cadence"),
                &["INTAKE_DISPLAY_DEFAULT_CADENCE"],
            ),
        ),
        render_line(
            "display.currency_symbol",
            &config.display.currency_symbol,
            source("display.currency_symbol", None, &["INTAKE_DISPLAY_CURRENCY_SYMBOL"]),
        ),
        render_line(
            "assets.base_url",
            config.assets.base_url.as_deref().unwrap_or("<unset>"),
            source(
                "assets.base_url",
                overrides.assets_base_url.as_ref().map(|_| "--assets-base-url"),
                &["INTAKE_ASSETS_BASE_URL"],
            ),
        ),
        render_line(
            "logging.level",
            &config.logging.level,
            source(
                "logging.level",
                overrides.log_level.as_ref().map(|_| "--log-level"),
                &["INTAKE_LOGGING_LEVEL", "INTAKE_LOG_LEVEL"],
            ),
        ),
        render_line(
            "logging.format",
            config.logging.format.key(),
            source("logging.format", None, &["INTAKE_LOGGING_FORMAT", "INTAKE_LOG_FORMAT"]),
        ),
    ];

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env_is_set(key)) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn env_is_set(key: &str) -> bool {
    env::var(key).is_ok_and(|value| !value.trim().is_empty())
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
