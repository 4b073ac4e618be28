//! Field spec parser.
//!
//! Parses the compact `name:Type` grammar used on the CLI boundary into
//! structured [`FieldSpec`] values. A trailing `?` on the type token marks
//! the field optional:
//!
//! ```text
//! age:Int        → FieldSpec { name: "age", ty: "Int", optional: false }
//! email:String?  → FieldSpec { name: "email", ty: "String", optional: true }
//! ```

use tracing::debug;

use crate::error::SpecError;
use crate::spec::{Endpoint, FieldSpec};

/// Parse a single `name:Type` token into a [`FieldSpec`].
///
/// Whitespace around the name and type is trimmed. The optional marker must
/// be adjacent to the type token: `String?` is optional, `String ?` is
/// rejected. Anything that does not split into exactly two non-empty parts
/// fails with [`SpecError::MalformedFieldSpec`].
pub fn parse_field(input: &str) -> Result<FieldSpec, SpecError> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 {
        return Err(SpecError::MalformedFieldSpec(input.to_string()));
    }

    let name = parts[0].trim();
    let mut ty = parts[1].trim();

    let optional = ty.ends_with('?');
    if optional {
        ty = &ty[..ty.len() - 1];
        // Marker detached from the type token, e.g. "String ?".
        if ty.ends_with(char::is_whitespace) {
            return Err(SpecError::MalformedFieldSpec(input.to_string()));
        }
    }

    if name.is_empty() || ty.is_empty() {
        return Err(SpecError::MalformedFieldSpec(input.to_string()));
    }

    Ok(FieldSpec {
        name: name.to_string(),
        ty: ty.to_string(),
        optional,
    })
}

/// Split a comma-joined property string and parse each token.
///
/// Splitting is purely on `,` with no escaping; a type containing a literal
/// comma or colon will misparse.
pub fn parse_field_list(input: &str) -> Result<Vec<FieldSpec>, SpecError> {
    let fields = input
        .split(',')
        .map(parse_field)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("parsed {} field specs", fields.len());
    Ok(fields)
}

/// Parse a `name:ReturnType` endpoint token. Same grammar as fields; a
/// trailing `?` renders back into the return type.
pub fn parse_endpoint(input: &str) -> Result<Endpoint, SpecError> {
    let field = parse_field(input)?;
    Ok(Endpoint {
        return_type: field.swift_type(),
        name: field.name,
    })
}

/// Split a comma-joined endpoint string and parse each token.
pub fn parse_endpoint_list(input: &str) -> Result<Vec<Endpoint>, SpecError> {
    input.split(',').map(parse_endpoint).collect()
}
