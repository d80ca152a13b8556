use crate::parsers::{PrimitiveKind, Shape};

/// The universal fallback type.
pub const ANY: &str = "any";

pub fn primitive_type(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "string",
        PrimitiveKind::Integer => "number",
        PrimitiveKind::Boolean => "boolean",
    }
}

/// Type of a shape when it is used as an alias target rather than a property.
pub fn alias_type(shape: Option<Shape<'_>>) -> &'static str {
    match shape {
        Some(Shape::Primitive(kind)) => primitive_type(kind),
        Some(Shape::StringEnum(_)) => primitive_type(PrimitiveKind::String),
        _ => ANY,
    }
}
