use super::comments::CommentRenderer;
use super::export_marker;
use super::names::NameAllocator;
use super::types::primitive_type;
use crate::config::RenderOptions;
use crate::parsers::PrimitiveKind;
use heck::ToShoutySnakeCase;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;

/// Decides between enum declarations and literal unions for enumerated strings.
pub struct EnumGenerator<'a> {
    options: &'a RenderOptions,
    declarations: Vec<String>,
}

impl<'a> EnumGenerator<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            declarations: Vec::new(),
        }
    }

    /// Type expression for an enumerated string.
    ///
    /// With unions-to-enum off this is an inline literal union and nothing is
    /// declared. Otherwise the enum is declared the first time `name` is seen
    /// and every request gets a template-literal reference to it.
    pub fn enum_for(
        &mut self,
        names: &mut NameAllocator,
        name: &str,
        titles: &IndexMap<String, Option<String>>,
        description: Option<&str>,
    ) -> String {
        // Nothing to enumerate: any string goes
        if titles.is_empty() {
            return primitive_type(PrimitiveKind::String).to_string();
        }

        if !self.options.union_to_enum {
            return literal_union(titles);
        }

        if names.register(name) {
            let declaration = self.render_enum(name, titles, description);
            tracing::debug!(name, members = titles.len(), "declared enum");
            self.declarations.push(declaration);
        } else {
            tracing::debug!(name, "reusing enum");
        }

        coercion_reference(name)
    }

    pub fn into_declarations(self) -> Vec<String> {
        self.declarations
    }

    fn render_enum(
        &self,
        name: &str,
        titles: &IndexMap<String, Option<String>>,
        description: Option<&str>,
    ) -> String {
        let comments = CommentRenderer::new(&self.options.comments);
        let mut text = comments.text(description, "").unwrap_or_default();

        text.push_str(&format!("{}enum {} {{\n", export_marker(self.options), name));

        let mut members = HashSet::new();
        for (value, title) in titles {
            if let Some(doc) = comments.text(title.as_deref(), "  ") {
                text.push_str(&doc);
            }
            let member = unique_member(&mut members, member_name(value));
            text.push_str(&format!("  {} = '{}',\n", member, escape_single_quoted(value)));
        }

        text.push_str("}\n");
        text
    }
}

/// `"A" | "B"` with each value JSON-quoted.
pub fn literal_union(titles: &IndexMap<String, Option<String>>) -> String {
    titles
        .keys()
        .map(|value| Value::from(value.as_str()).to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Reference to an enum that is usable wherever a plain string is expected.
pub fn coercion_reference(name: &str) -> String {
    format!("`${{{name}}}`")
}

/// SHOUTY_SNAKE_CASE member identifier for a raw value.
fn member_name(value: &str) -> String {
    let name = value.to_shouty_snake_case();
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
        None => "_".to_string(),
    }
}

fn unique_member(taken: &mut HashSet<String>, name: String) -> String {
    let mut candidate = name.clone();
    let mut suffix = 1;
    while !taken.insert(candidate.clone()) {
        suffix += 1;
        candidate = format!("{name}_{suffix}");
    }
    candidate
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(pairs: &[(&str, Option<&str>)]) -> IndexMap<String, Option<String>> {
        pairs
            .iter()
            .map(|(v, t)| (v.to_string(), t.map(str::to_string)))
            .collect()
    }

    #[test]
    fn declares_enum_with_documented_members() {
        let options = RenderOptions::default();
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);

        let reference = enums.enum_for(
            &mut names,
            "StatusEnum",
            &titles(&[("A", Some("desc A")), ("B", Some("desc B"))]),
            None,
        );

        assert_eq!(reference, "`${StatusEnum}`");
        assert_eq!(
            enums.into_declarations(),
            ["export enum StatusEnum {\n  /**\n   * desc A\n   */\n  A = 'A',\n  /**\n   * desc B\n   */\n  B = 'B',\n}\n"]
        );
    }

    #[test]
    fn same_name_is_declared_once() {
        let options = RenderOptions::default();
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);
        let values = titles(&[("A", None)]);

        let first = enums.enum_for(&mut names, "StatusEnum", &values, None);
        let second = enums.enum_for(&mut names, "StatusEnum", &titles(&[("C", None)]), None);

        assert_eq!(first, second);
        assert_eq!(enums.into_declarations().len(), 1);
    }

    #[test]
    fn union_policy_off_emits_literal_union() {
        let options = RenderOptions {
            union_to_enum: false,
            ..Default::default()
        };
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);

        let ty = enums.enum_for(
            &mut names,
            "StatusEnum",
            &titles(&[("A", Some("desc A")), ("B", None)]),
            None,
        );

        assert_eq!(ty, r#""A" | "B""#);
        assert!(enums.into_declarations().is_empty());
        // Nothing was registered
        assert!(names.register("StatusEnum"));
    }

    #[test]
    fn description_and_export_follow_options() {
        let options = RenderOptions {
            use_export: false,
            ..Default::default()
        };
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);

        enums.enum_for(&mut names, "KindEnum", &titles(&[("x", None)]), Some("Kind of thing"));

        assert_eq!(
            enums.into_declarations(),
            ["/**\n * Kind of thing\n */\nenum KindEnum {\n  X = 'x',\n}\n"]
        );
    }

    #[test]
    fn enum_doc_rewrites_doc_references() {
        let options = RenderOptions::default();
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);

        enums.enum_for(&mut names, "KindEnum", &titles(&[("x", None)]), Some("See (~~123~~)"));

        assert!(enums.into_declarations()[0]
            .starts_with("/**\n * See (https://help.aliyun.com/document_detail/123.html)\n */\n"));
    }

    #[test]
    fn empty_titles_are_plain_strings() {
        let options = RenderOptions::default();
        let mut names = NameAllocator::default();
        let mut enums = EnumGenerator::new(&options);

        assert_eq!(enums.enum_for(&mut names, "ModeEnum", &IndexMap::new(), None), "string");
        assert!(enums.into_declarations().is_empty());
        assert!(names.register("ModeEnum"));
    }

    #[test]
    fn member_names_are_shouty_snake_case() {
        assert_eq!(member_name("A"), "A");
        assert_eq!(member_name("inUse"), "IN_USE");
        assert_eq!(member_name("pay-as-you-go"), "PAY_AS_YOU_GO");
        assert_eq!(member_name("2xlarge"), "_2XLARGE");
        // Letter/digit runs are not split
        assert_eq!(member_name("v1beta"), "V1BETA");
        assert_eq!(member_name(""), "_");
    }

    #[test]
    fn colliding_members_get_suffixes() {
        let mut taken = HashSet::new();
        assert_eq!(unique_member(&mut taken, "IN_USE".to_string()), "IN_USE");
        assert_eq!(unique_member(&mut taken, "IN_USE".to_string()), "IN_USE_2");
        assert_eq!(unique_member(&mut taken, "IN_USE".to_string()), "IN_USE_3");
    }

    #[test]
    fn values_are_escaped() {
        assert_eq!(escape_single_quoted("it's"), "it\\'s");
    }
}
