use super::{ApiInfo, InputParser, NamedApi};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// A single API document, as served per API by the metadata service.
pub struct ApiParser;

impl InputParser for ApiParser {
    fn format_name(&self) -> &str {
        "api"
    }

    fn matches(&self, document: &Value) -> bool {
        document.is_object() && !is_bundle(document)
    }

    fn parse(&self, source: &Path, document: Value, selected: Option<&str>) -> Result<Vec<NamedApi>> {
        let info: ApiInfo = serde_json::from_value(document)
            .with_context(|| format!("Invalid API document: {:?}", source))?;

        // Without an explicit name the file stem names the API
        let name = match selected {
            Some(name) => name.to_string(),
            None => source
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Cannot derive an API name from {:?}, pass --api", source))?,
        };

        Ok(vec![NamedApi { name, info }])
    }
}

#[derive(Debug, Deserialize)]
struct ApiDocs {
    #[serde(default)]
    apis: IndexMap<String, ApiInfo>,
}

/// A product documentation bundle: `{ "apis": { "<Name>": ApiInfo } }`.
pub struct ApiDocsParser;

impl InputParser for ApiDocsParser {
    fn format_name(&self) -> &str {
        "api-docs"
    }

    fn matches(&self, document: &Value) -> bool {
        is_bundle(document)
    }

    fn parse(&self, source: &Path, document: Value, selected: Option<&str>) -> Result<Vec<NamedApi>> {
        let docs: ApiDocs = serde_json::from_value(document)
            .with_context(|| format!("Invalid API docs bundle: {:?}", source))?;

        match selected {
            Some(name) => {
                let (name, info) = docs
                    .apis
                    .into_iter()
                    .find(|(api, _)| api == name)
                    .ok_or_else(|| anyhow::anyhow!("API {:?} not found in {:?}", name, source))?;
                Ok(vec![NamedApi { name, info }])
            }
            None => Ok(docs
                .apis
                .into_iter()
                .map(|(name, info)| NamedApi { name, info })
                .collect()),
        }
    }
}

fn is_bundle(document: &Value) -> bool {
    document.get("apis").is_some_and(Value::is_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle() -> Value {
        json!({
            "apis": {
                "DescribeRegions": {"parameters": [], "title": "Regions"},
                "ListUsers": {"parameters": [{"name": "id", "schema": {"type": "integer"}}]}
            }
        })
    }

    #[test]
    fn single_api_named_after_file_stem() {
        let apis = ApiParser
            .parse(Path::new("specs/ListUsers.json"), json!({"parameters": []}), None)
            .unwrap();
        assert_eq!(apis.len(), 1);
        assert_eq!(apis[0].name, "ListUsers");
    }

    #[test]
    fn single_api_prefers_selected_name() {
        let apis = ApiParser
            .parse(Path::new("api.json"), json!({}), Some("GetUser"))
            .unwrap();
        assert_eq!(apis[0].name, "GetUser");
    }

    #[test]
    fn bundle_yields_every_api_in_order() {
        let apis = ApiDocsParser.parse(Path::new("api-docs.json"), bundle(), None).unwrap();
        let names: Vec<_> = apis.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["DescribeRegions", "ListUsers"]);
        assert_eq!(apis[0].info.title.as_deref(), Some("Regions"));
    }

    #[test]
    fn bundle_selects_one_api() {
        let apis = ApiDocsParser
            .parse(Path::new("api-docs.json"), bundle(), Some("ListUsers"))
            .unwrap();
        assert_eq!(apis.len(), 1);
        assert_eq!(apis[0].info.parameters[0].name, "id");
    }

    #[test]
    fn bundle_rejects_unknown_selection() {
        let err = ApiDocsParser
            .parse(Path::new("api-docs.json"), bundle(), Some("Nope"))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
