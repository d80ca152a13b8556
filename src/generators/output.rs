use crate::parsers::NamedApi;
use anyhow::{Context, Result};
use std::path::Path;
use tera::Tera;

/// Declarations collected by one generation run, in output order.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub enums: Vec<String>,
    pub interfaces: Vec<String>,
}

impl Declarations {
    /// Enums first, then interfaces and aliases, one blank line apart.
    pub fn assemble(&self) -> String {
        self.enums
            .iter()
            .chain(&self.interfaces)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const TEMPLATE_NAME: &str = "file";

/// Turns a run's declarations into the content of one output file.
pub struct FileRenderer {
    tera: Option<Tera>,
}

impl FileRenderer {
    pub fn new(template: Option<&Path>) -> Result<Self> {
        let tera = match template {
            Some(path) => {
                let mut tera = Tera::default();
                tera.autoescape_on(vec![]);
                tera.add_template_file(path, Some(TEMPLATE_NAME))
                    .with_context(|| format!("Failed to load template: {:?}", path))?;
                Some(tera)
            }
            None => None,
        };

        Ok(Self { tera })
    }

    pub fn render(&self, api: &NamedApi, declarations: &Declarations) -> Result<String> {
        let Some(tera) = &self.tera else {
            return Ok(format!("{}{}", header(api), declarations.assemble()));
        };

        let mut context = tera::Context::new();
        context.insert("api", &api.name);
        context.insert("title", &api.info.title);
        context.insert("summary", &api.info.summary);
        context.insert("declarations", &declarations.assemble());
        context.insert("enums", &declarations.enums);
        context.insert("interfaces", &declarations.interfaces);

        tera.render(TEMPLATE_NAME, &context)
            .with_context(|| format!("Failed to render template for {}", api.name))
    }
}

fn header(api: &NamedApi) -> String {
    let mut lines = Vec::new();

    match non_blank(api.info.title.as_deref()) {
        Some(title) => lines.push(format!("// {}: {}", api.name, title)),
        None => {
            if non_blank(api.info.summary.as_deref()).is_some() {
                lines.push(format!("// {}", api.name));
            }
        }
    }
    if let Some(summary) = non_blank(api.info.summary.as_deref()) {
        lines.extend(summary.lines().map(|line| format!("// {}", line.trim_end())));
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n\n", lines.join("\n"))
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ApiInfo;
    use std::fs;

    fn declarations() -> Declarations {
        Declarations {
            enums: vec!["export enum AEnum {\n  A = 'A',\n}\n".to_string()],
            interfaces: vec![
                "export interface XResponse {\n}\n".to_string(),
                "export interface XParameters {\n}\n".to_string(),
            ],
        }
    }

    fn named(title: Option<&str>, summary: Option<&str>) -> NamedApi {
        NamedApi {
            name: "X".to_string(),
            info: ApiInfo {
                title: title.map(str::to_string),
                summary: summary.map(str::to_string),
                ..Default::default()
            },
        }
    }

    #[test]
    fn enums_come_before_interfaces() {
        assert_eq!(
            declarations().assemble(),
            "export enum AEnum {\n  A = 'A',\n}\n\nexport interface XResponse {\n}\n\nexport interface XParameters {\n}\n"
        );
        assert_eq!(Declarations::default().assemble(), "");
    }

    #[test]
    fn default_file_has_header_when_documented() {
        let renderer = FileRenderer::new(None).unwrap();

        let plain = renderer.render(&named(None, None), &declarations()).unwrap();
        assert!(plain.starts_with("export enum AEnum"));

        let documented = renderer
            .render(&named(Some("List users"), Some("Lists every user.")), &declarations())
            .unwrap();
        assert!(documented.starts_with("// X: List users\n// Lists every user.\n\nexport enum AEnum"));

        let summary_only = renderer.render(&named(None, Some("Only a summary")), &declarations()).unwrap();
        assert!(summary_only.starts_with("// X\n// Only a summary\n\n"));
    }

    #[test]
    fn template_wraps_declarations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.ts.tera");
        fs::write(
            &path,
            "/* {{ api }} ({{ enums | length }} enums) */\n{{ declarations }}{% for i in interfaces %}// <{{ loop.index }}>\n{% endfor %}",
        )
        .unwrap();

        let renderer = FileRenderer::new(Some(path.as_path())).unwrap();
        let content = renderer.render(&named(None, None), &declarations()).unwrap();

        assert!(content.starts_with("/* X (1 enums) */\nexport enum AEnum {\n  A = 'A',\n}\n"));
        assert!(content.ends_with("// <1>\n// <2>\n"));
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileRenderer::new(Some(dir.path().join("nope.tera").as_path())).is_err());
    }
}
