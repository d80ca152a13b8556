use crate::config::CommentOptions;
use crate::parsers::Schema;
use regex::Regex;
use std::sync::LazyLock;

/// `(~~12345~~)` is how the metadata links to a documentation page.
static DOC_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(~~(\d+)~~\)").expect("doc reference pattern is valid"));

const DOC_URL: &str = "(https://help.aliyun.com/document_detail/$1.html)";

/// Renders `/** ... */` blocks for properties, enums and enum members.
#[derive(Debug, Clone, Copy)]
pub struct CommentRenderer<'a> {
    options: &'a CommentOptions,
}

impl<'a> CommentRenderer<'a> {
    pub fn new(options: &'a CommentOptions) -> Self {
        Self { options }
    }

    /// Doc block for an interface property, or `None` when there is nothing to say.
    pub fn property(&self, schema: &Schema) -> Option<String> {
        if self.options.disabled {
            return None;
        }

        let mut lines = Vec::new();

        if let Some(description) = &schema.description {
            let description = DOC_REFERENCE.replace_all(description, DOC_URL);
            lines.extend(description.split('\n').map(|line| line.trim().to_string()));
        }

        if schema.is_deprecated() {
            lines.push(String::new());
            lines.push("@deprecated".to_string());
        }

        if self.options.insert_example {
            if let Some(example) = schema.example_text() {
                lines.push(String::new());
                lines.push("@example".to_string());
                lines.extend(example.split('\n').map(str::to_string));
            }
        }

        if lines.is_empty() {
            return None;
        }

        Some(doc_block(&lines, "  "))
    }

    /// Top-level doc block built from free text; blank text renders nothing.
    pub fn text(&self, text: Option<&str>, indent: &str) -> Option<String> {
        if self.options.disabled {
            return None;
        }
        let text = text.filter(|t| !t.trim().is_empty())?;
        let text = DOC_REFERENCE.replace_all(text, DOC_URL);
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        Some(doc_block(&lines, indent))
    }
}

fn doc_block(lines: &[String], indent: &str) -> String {
    let mut block = format!("{indent}/**\n");
    for line in lines {
        if line.is_empty() {
            block.push_str(&format!("{indent} *\n"));
        } else {
            block.push_str(&format!("{indent} * {line}\n"));
        }
    }
    block.push_str(&format!("{indent} */\n"));
    block
}
