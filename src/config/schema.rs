use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub version: String,

    #[serde(default)]
    pub input: Option<InputConfig>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Optional tera template wrapping each generated file
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InputConfig {
    #[serde(default)]
    pub format: Option<String>,

    pub source: PathBuf,

    /// API to generate; defaults to the file stem, or every API of a bundle
    #[serde(default)]
    pub api: Option<String>,
}

/// How declarations are rendered.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default = "default_true")]
    pub use_export: bool,

    #[serde(default)]
    pub property_format: PropertyFormat,

    #[serde(default)]
    pub comments: CommentOptions,

    #[serde(default)]
    pub interface_name_prefix: String,

    #[serde(default = "default_true")]
    pub union_to_enum: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentOptions {
    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub insert_example: bool,
}

/// Casing applied to emitted property keys.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum PropertyFormat {
    #[default]
    Auto,
    LowerFirst,
    UpperFirst,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct HooksConfig {
    #[serde(rename = "beforeGenerate", default)]
    pub before_generate: Vec<String>,

    #[serde(rename = "afterGenerate", default)]
    pub after_generate: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_export: true,
            property_format: PropertyFormat::Auto,
            comments: CommentOptions::default(),
            interface_name_prefix: String::new(),
            union_to_enum: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            input: None,
            output: Some(PathBuf::from("generated")),
            template: None,
            render: RenderOptions::default(),
            hooks: HooksConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_match_documented_values() {
        let render = RenderOptions::default();
        assert!(render.use_export);
        assert_eq!(render.property_format, PropertyFormat::Auto);
        assert!(!render.comments.disabled);
        assert!(!render.comments.insert_example);
        assert_eq!(render.interface_name_prefix, "");
        assert!(render.union_to_enum);
    }

    #[test]
    fn partial_render_section_keeps_defaults() {
        let config: Config = serde_yaml::from_str(
            "version: '1.0'\nrender:\n  propertyFormat: lowerFirst\n  comments:\n    insertExample: true\n",
        )
        .unwrap();
        assert_eq!(config.render.property_format, PropertyFormat::LowerFirst);
        assert!(config.render.comments.insert_example);
        assert!(config.render.use_export);
        assert!(config.render.union_to_enum);
    }
}
