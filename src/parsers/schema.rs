use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// One node of the API metadata schema tree.
///
/// Every field is optional so that partial documents still load. The raw
/// `type` tag is kept as a string and classified through [`Schema::shape`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub properties: Option<IndexMap<String, Schema>>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    /// Raw enumerated value -> human readable title.
    #[serde(default)]
    pub enum_value_titles: Option<IndexMap<String, Option<String>>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub deprecated: Option<bool>,

    /// Absent or `true` means required, only an explicit `false` is optional.
    /// Non-boolean values (e.g. a JSON-Schema style name list) read as absent.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub required: Option<bool>,

    #[serde(default)]
    pub example: Option<JsonValue>,

    #[serde(default)]
    pub default: Option<JsonValue>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(JsonValue::deserialize(deserializer)?.as_bool())
}

/// Primitive schema kinds that map straight onto a target type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Integer,
    Boolean,
}

/// Classified view of a [`Schema`] node.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Primitive(PrimitiveKind),
    StringEnum(&'a IndexMap<String, Option<String>>),
    ArrayOf(&'a Schema),
    ObjectWith(&'a IndexMap<String, Schema>),
    Unknown,
}

static EMPTY_SCHEMA: Schema = Schema {
    kind: None,
    properties: None,
    items: None,
    enum_value_titles: None,
    description: None,
    deprecated: None,
    required: None,
    example: None,
    default: None,
};

impl Schema {
    /// A schema with no information at all; classifies as [`Shape::Unknown`].
    pub fn empty() -> &'static Schema {
        &EMPTY_SCHEMA
    }

    pub fn shape(&self) -> Shape<'_> {
        match self.kind.as_deref() {
            Some("string") => match &self.enum_value_titles {
                Some(titles) => Shape::StringEnum(titles),
                None => Shape::Primitive(PrimitiveKind::String),
            },
            Some("integer") => Shape::Primitive(PrimitiveKind::Integer),
            Some("boolean") => Shape::Primitive(PrimitiveKind::Boolean),
            // An array without `items` still is an array, of unknown elements.
            Some("array") => Shape::ArrayOf(self.items.as_deref().unwrap_or(Schema::empty())),
            Some("object") => match &self.properties {
                Some(properties) => Shape::ObjectWith(properties),
                None => Shape::Unknown,
            },
            _ => Shape::Unknown,
        }
    }

    /// Only an explicit `required: false` makes a property optional.
    pub fn is_optional(&self) -> bool {
        self.required == Some(false)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    /// The example as text; non-string scalars render through their JSON form.
    pub fn example_text(&self) -> Option<String> {
        match self.example.as_ref()? {
            JsonValue::Null => None,
            JsonValue::String(s) if s.is_empty() => None,
            JsonValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A single request parameter of an API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "in", default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub deprecated: Option<bool>,

    #[serde(default)]
    pub style: Option<String>,

    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub headers: Option<IndexMap<String, JsonValue>>,

    #[serde(default)]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// Metadata describing one API: its parameters and responses by status code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(default)]
    pub error_codes: IndexMap<String, ErrorDetail>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,
}

impl ApiInfo {
    /// The schema of the `200` response, if any.
    pub fn success_schema(&self) -> Option<&Schema> {
        self.responses.get("200")?.schema.as_ref()
    }
}

/// An [`ApiInfo`] together with the API name it was published under.
#[derive(Debug, Clone)]
pub struct NamedApi {
    pub name: String,
    pub info: ApiInfo,
}
