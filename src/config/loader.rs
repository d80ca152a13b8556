use super::schema::{Config, InputConfig, PropertyFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./.config/schema2ts.yaml";

/// Values given on the command line; `None`/`false` leaves the config as is.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub spec: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub api: Option<String>,
    pub template: Option<PathBuf>,
    pub prefix: Option<String>,
    pub property_format: Option<PropertyFormat>,
    pub no_export: bool,
    pub no_comments: bool,
    pub insert_example: bool,
    pub no_enum: bool,
}

/// Load configuration from file or return default
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    let config_path = match custom_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG_PATH),
    };

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    } else if custom_path.is_some() {
        // Custom path specified but doesn't exist - error
        anyhow::bail!("Config file not found: {:?}", config_path);
    } else {
        // Default path doesn't exist - use built-in defaults
        Ok(Config::default())
    }
}

/// Merge config with CLI arguments (CLI takes precedence)
pub fn merge_with_cli_args(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(spec_path) = cli.spec {
        match &mut config.input {
            Some(input) => input.source = spec_path,
            None => {
                config.input = Some(InputConfig {
                    format: None,
                    source: spec_path,
                    api: None,
                })
            }
        }
    }

    // Format and API only make sense once there is an input
    if let Some(input) = &mut config.input {
        if cli.format.is_some() {
            input.format = cli.format;
        }
        if cli.api.is_some() {
            input.api = cli.api;
        }
    }

    if let Some(output_path) = cli.output {
        config.output = Some(output_path);
    }
    if cli.template.is_some() {
        config.template = cli.template;
    }

    let render = &mut config.render;
    if let Some(prefix) = cli.prefix {
        render.interface_name_prefix = prefix;
    }
    if let Some(format) = cli.property_format {
        render.property_format = format;
    }
    if cli.no_export {
        render.use_export = false;
    }
    if cli.no_comments {
        render.comments.disabled = true;
    }
    if cli.insert_example {
        render.comments.insert_example = true;
    }
    if cli.no_enum {
        render.union_to_enum = false;
    }

    config
}
