pub mod schema;
pub mod api_parser;

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub use schema::*;
pub use api_parser::{ApiDocsParser, ApiParser};

/// Input parser trait - turns one metadata document into named APIs
pub trait InputParser: Send + Sync {
    /// Name of the input format (e.g., "api", "api-docs")
    fn format_name(&self) -> &str;

    /// Whether a loaded document looks like this format
    fn matches(&self, document: &Value) -> bool;

    /// Convert a loaded document into the APIs to generate.
    /// `selected` narrows the result to one API name.
    fn parse(&self, source: &Path, document: Value, selected: Option<&str>) -> Result<Vec<NamedApi>>;
}

/// Parser registry for managing available input parsers
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn InputParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: HashMap::new(),
        };

        // Register built-in parsers
        registry.register(Box::new(ApiParser));
        registry.register(Box::new(ApiDocsParser));

        registry
    }

    pub fn register(&mut self, parser: Box<dyn InputParser>) {
        self.parsers.insert(parser.format_name().to_string(), parser);
    }

    pub fn get(&self, format: &str) -> Option<&dyn InputParser> {
        self.parsers.get(format).map(|p| p.as_ref())
    }

    /// Auto-detect format from document content
    pub fn detect_format(&self, document: &Value) -> Option<&str> {
        self.parsers
            .values()
            .find(|parser| parser.matches(document))
            .map(|parser| parser.format_name())
    }

    pub fn available_formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSON or YAML document into a generic value.
pub fn read_document(source: &Path) -> Result<Value> {
    if !source.exists() {
        anyhow::bail!("Input file not found: {:?}", source);
    }

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read input file: {:?}", source))?;

    let is_yaml = matches!(
        source.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    );

    let document = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML input: {:?}", source))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON input: {:?}", source))?
    };

    Ok(document)
}
