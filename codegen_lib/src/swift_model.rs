/// Swift model generator (Codable structs)

use crate::format::FormatOptions;
use crate::spec::{ArtifactKind, ArtifactSpec};
use crate::Generator;

pub struct SwiftModelGenerator;

impl Generator for SwiftModelGenerator {
    fn generate(&self, spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
        generate_model(spec, fmt)
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }
}

pub fn generate_model(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let pad = fmt.indent(1);
    let pad2 = fmt.indent(2);

    // Protocol list order is fixed so output stays byte-stable.
    let mut protocols = Vec::new();
    if spec.flags.codable {
        protocols.push("Codable");
    }
    if spec.flags.identifiable {
        protocols.push("Identifiable");
    }
    let conformance = if protocols.is_empty() {
        String::new()
    } else {
        format!(": {}", protocols.join(", "))
    };
    lines.push(format!("struct {}{} {{", spec.name, conformance));

    for field in &spec.fields {
        lines.push(format!("{}let {}: {}", pad, field.name, field.swift_type()));
    }

    // A zero-parameter initializer provides no value, so the block is
    // omitted entirely when there are no fields.
    if spec.flags.with_init && !spec.fields.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}{}", pad, fmt.section("Initialization")));
        lines.push(String::new());

        let params: Vec<String> = spec
            .fields
            .iter()
            .map(|f| {
                let default = if f.optional { " = nil" } else { "" };
                format!("{}: {}{}", f.name, f.swift_type(), default)
            })
            .collect();
        lines.push(format!("{}init({}) {{", pad, params.join(", ")));

        for field in &spec.fields {
            lines.push(format!("{}self.{} = {}", pad2, field.name, field.name));
        }

        lines.push(format!("{}}}", pad));
    }

    lines.push("}".to_string());

    lines.join("\n")
}
