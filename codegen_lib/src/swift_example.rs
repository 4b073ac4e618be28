/// Example usage generator (instantiation + JSON round trip)

use crate::format::FormatOptions;
use crate::spec::{ArtifactSpec, FieldSpec};

/// Emit an illustrative instantiation of the model plus a JSON
/// encode/decode round trip. Appended after the model when requested.
pub fn generate_example(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let pad = fmt.indent(1);
    let instance = spec.name.to_lowercase();

    lines.push(fmt.section("Example Usage"));
    lines.push(String::new());
    lines.push("// Create instance".to_string());

    lines.push(format!("let {} = {}(", instance, spec.name));
    let count = spec.fields.len();
    for (i, field) in spec.fields.iter().enumerate() {
        let comma = if i + 1 < count { "," } else { "" };
        lines.push(format!(
            "{}{}: {}{}",
            pad,
            field.name,
            example_literal(field),
            comma
        ));
    }
    lines.push(")".to_string());

    lines.push(String::new());
    lines.push("// Encode to JSON".to_string());
    lines.push("let encoder = JSONEncoder()".to_string());
    lines.push("encoder.outputFormatting = .prettyPrinted".to_string());
    lines.push(format!("if let jsonData = try? encoder.encode({}),", instance));
    lines.push("   let jsonString = String(data: jsonData, encoding: .utf8) {".to_string());
    lines.push(format!("{}print(jsonString)", pad));
    lines.push("}".to_string());

    lines.push(String::new());
    lines.push("// Decode from JSON".to_string());
    lines.push("let decoder = JSONDecoder()".to_string());
    lines.push(format!(
        "if let decoded = try? decoder.decode({}.self, from: jsonData) {{",
        spec.name
    ));
    lines.push(format!("{}print(decoded)", pad));
    lines.push("}".to_string());

    lines.join("\n")
}

/// Pick an example literal for a field by type name. The fallback branch
/// makes the dispatch total: any unrecognized type gets a default-construct
/// call, or `nil` when the field is optional.
fn example_literal(field: &FieldSpec) -> String {
    match field.ty.as_str() {
        "String" => format!("\"{}_value\"", field.name),
        "Int" => "42".to_string(),
        "Double" | "Float" => "3.14".to_string(),
        "Bool" => "true".to_string(),
        _ => {
            if field.optional {
                "nil".to_string()
            } else {
                format!("{}()", field.ty)
            }
        }
    }
}
