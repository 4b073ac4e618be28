/// Swift actor generator (thread-safe state containers)

use crate::format::{capitalize_first, FormatOptions};
use crate::spec::{ArtifactKind, ArtifactSpec};
use crate::Generator;

pub struct SwiftActorGenerator;

impl Generator for SwiftActorGenerator {
    fn generate(&self, spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
        generate_actor(spec, fmt)
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Actor
    }
}

pub fn generate_actor(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let pad = fmt.indent(1);
    let pad2 = fmt.indent(2);

    lines.push(format!("// {} - Generated Actor", spec.name));
    lines.push(String::new());
    lines.push("import Foundation".to_string());
    lines.push(String::new());
    lines.push(format!("actor {} {{", spec.name));

    for field in &spec.fields {
        lines.push(format!(
            "{}private var {}: {}",
            pad,
            field.name,
            field.swift_type()
        ));
    }

    if !spec.fields.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}{}", pad, fmt.section("Initialization")));
        lines.push(String::new());
        lines.push(format!("{}init(", pad));
        let count = spec.fields.len();
        for (i, field) in spec.fields.iter().enumerate() {
            let comma = if i + 1 < count { "," } else { "" };
            lines.push(format!(
                "{}{}: {}{}",
                pad2,
                field.name,
                field.swift_type(),
                comma
            ));
        }
        lines.push(format!("{}) {{", pad));
        for field in &spec.fields {
            lines.push(format!("{}self.{} = {}", pad2, field.name, field.name));
        }
        lines.push(format!("{}}}", pad));

        lines.push(String::new());
        lines.push(format!("{}{}", pad, fmt.section("Getters")));
        lines.push(String::new());
        for field in &spec.fields {
            lines.push(format!(
                "{}func get{}() -> {} {{",
                pad,
                capitalize_first(&field.name),
                field.swift_type()
            ));
            lines.push(format!("{}return {}", pad2, field.name));
            lines.push(format!("{}}}", pad));
            lines.push(String::new());
        }

        lines.push(format!("{}{}", pad, fmt.section("Setters")));
        lines.push(String::new());
        for field in &spec.fields {
            lines.push(format!(
                "{}func set{}(_ newValue: {}) {{",
                pad,
                capitalize_first(&field.name),
                field.swift_type()
            ));
            lines.push(format!("{}{} = newValue", pad2, field.name));
            lines.push(format!("{}}}", pad));
            lines.push(String::new());
        }
    }

    lines.push("}".to_string());

    lines.join("\n")
}
