use super::comments::CommentRenderer;
use super::enums::EnumGenerator;
use super::export_marker;
use super::names::{lower_first, upper_first, NameAllocator};
use super::output::Declarations;
use super::types::{alias_type, primitive_type, ANY};
use crate::config::{PropertyFormat, RenderOptions};
use crate::parsers::{ApiInfo, Schema, Shape};
use heck::ToUpperCamelCase;
use std::collections::HashSet;

/// Generate the enum and interface declarations describing one API.
///
/// Every call owns a fresh [`GenerationSession`], so names allocated by one
/// API never leak into another.
pub fn generate(api_name: &str, info: &ApiInfo, options: &RenderOptions) -> Declarations {
    let mut session = GenerationSession::new(api_name, options);

    session.emit_response(info.success_schema());

    let parameters_name = session.names.allocate(&format!("{api_name}Parameters"));
    session.emit_interface(
        &parameters_name,
        info.parameters
            .iter()
            .map(|p| (p.name.as_str(), p.schema.as_ref().unwrap_or(Schema::empty()))),
    );

    session.finish()
}

/// Mutable state of one generation run: issued names and pending declarations.
///
/// Interfaces are ordered first-discovered-first: a slot is reserved as soon
/// as the walk starts an interface, so a parent precedes the children it
/// references.
pub struct GenerationSession<'a> {
    api_name: &'a str,
    options: &'a RenderOptions,
    comments: CommentRenderer<'a>,
    names: NameAllocator,
    enums: EnumGenerator<'a>,
    interfaces: Vec<String>,
}

impl<'a> GenerationSession<'a> {
    pub fn new(api_name: &'a str, options: &'a RenderOptions) -> Self {
        Self {
            api_name,
            options,
            comments: CommentRenderer::new(&options.comments),
            names: NameAllocator::new(options.interface_name_prefix.as_str()),
            enums: EnumGenerator::new(options),
            interfaces: Vec::new(),
        }
    }

    pub fn finish(self) -> Declarations {
        Declarations {
            enums: self.enums.into_declarations(),
            interfaces: self.interfaces,
        }
    }

    /// An object response becomes an interface, anything else a type alias.
    fn emit_response(&mut self, schema: Option<&Schema>) {
        let name = self.names.allocate(&format!("{}Response", self.api_name));
        let shape = schema.map(Schema::shape);

        match shape {
            Some(Shape::ObjectWith(properties)) => {
                self.emit_interface(&name, properties.iter().map(|(k, v)| (k.as_str(), v)));
            }
            _ => {
                tracing::debug!(%name, "response is not an object, emitting type alias");
                self.interfaces.push(format!(
                    "{}type {} = {};\n",
                    export_marker(self.options),
                    name,
                    alias_type(shape)
                ));
            }
        }
    }

    fn emit_interface<'s>(&mut self, name: &str, entries: impl IntoIterator<Item = (&'s str, &'s Schema)>) {
        let slot = self.interfaces.len();
        self.interfaces.push(String::new());

        // Keys are compared after the casing policy; first occurrence wins
        let mut seen = HashSet::new();
        let mut body = String::new();
        for (property, schema) in entries {
            let key = property_key(property, self.options.property_format);
            if seen.contains(&key) {
                tracing::debug!(interface = name, property, "dropping duplicate property");
                continue;
            }
            body.push_str(&self.emit_property(property, &key, schema));
            seen.insert(key);
        }

        tracing::debug!(interface = name, properties = seen.len(), "emitted interface");
        self.interfaces[slot] = format!(
            "{}interface {} {{\n{}}}\n",
            export_marker(self.options),
            name,
            body
        );
    }

    fn emit_property(&mut self, name: &str, key: &str, schema: &Schema) -> String {
        let mut text = self.comments.property(schema).unwrap_or_default();

        let property_type = self.property_type(name, schema);
        let optional = if schema.is_optional() { "?" } else { "" };

        text.push_str(&format!(
            "  {}{}: {};\n",
            key,
            optional,
            property_type
        ));
        text
    }

    fn property_type(&mut self, name: &str, schema: &Schema) -> String {
        match schema.shape() {
            Shape::Primitive(kind) => primitive_type(kind).to_string(),
            Shape::StringEnum(titles) => self.enums.enum_for(
                &mut self.names,
                &enum_name(name),
                titles,
                schema.description.as_deref(),
            ),
            Shape::ArrayOf(items) => self.array_type(name, schema, items),
            Shape::ObjectWith(properties) => self.nested_interface(name, properties.iter()),
            Shape::Unknown => ANY.to_string(),
        }
    }

    /// Element type of `array` with `[]` appended, recursing through nested arrays.
    /// Enumerated elements are documented with the array property's description.
    fn array_type(&mut self, name: &str, array: &Schema, items: &Schema) -> String {
        match items.shape() {
            Shape::ArrayOf(inner) => format!("{}[]", self.array_type(name, array, inner)),
            Shape::ObjectWith(properties) => {
                format!("{}[]", self.nested_interface(name, properties.iter()))
            }
            Shape::StringEnum(titles) => {
                let element = self.enums.enum_for(
                    &mut self.names,
                    &enum_name(name),
                    titles,
                    array.description.as_deref(),
                );
                if element.contains(" | ") {
                    format!("({element})[]")
                } else {
                    format!("{element}[]")
                }
            }
            Shape::Primitive(kind) => format!("{}[]", primitive_type(kind)),
            Shape::Unknown => format!("{ANY}[]"),
        }
    }

    fn nested_interface<'s>(
        &mut self,
        property: &str,
        properties: impl Iterator<Item = (&'s String, &'s Schema)>,
    ) -> String {
        let name = self
            .names
            .allocate(&format!("{}{}", self.api_name, type_segment(property)));
        self.emit_interface(&name, properties.map(|(k, v)| (k.as_str(), v)));
        name
    }
}

fn enum_name(property: &str) -> String {
    format!("{}Enum", type_segment(property))
}

/// Capitalized property name usable inside a type name.
/// Keys like `x-acs-id` or `Tag.1.Key` are camel-cased into identifiers.
fn type_segment(property: &str) -> String {
    if property.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return upper_first(property);
    }
    let segment = property.to_upper_camel_case();
    match segment.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{segment}"),
        Some(_) => segment,
        None => "_".to_string(),
    }
}

/// Apply the casing policy and quote keys that are not plain identifiers.
fn property_key(name: &str, format: PropertyFormat) -> String {
    let key = match format {
        PropertyFormat::Auto => name.to_string(),
        PropertyFormat::LowerFirst => lower_first(name),
        PropertyFormat::UpperFirst => upper_first(name),
    };

    if is_identifier(&key) {
        key
    } else {
        format!("'{}'", key.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
