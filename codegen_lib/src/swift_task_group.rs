/// Swift TaskGroup fan-out function generator

use crate::format::FormatOptions;
use crate::spec::{ArtifactKind, ArtifactSpec};
use crate::Generator;

pub struct SwiftTaskGroupGenerator;

impl Generator for SwiftTaskGroupGenerator {
    fn generate(&self, spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
        generate_task_group(spec, fmt)
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::TaskGroup
    }
}

pub fn generate_task_group(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let pad = fmt.indent(1);
    let pad2 = fmt.indent(2);
    let pad3 = fmt.indent(3);
    let pad4 = fmt.indent(4);
    let item_type = spec.item_type.as_deref().unwrap_or("Item");

    lines.push(format!("// {} - Generated TaskGroup Function", spec.name));
    lines.push(String::new());
    lines.push("import Foundation".to_string());
    lines.push(String::new());
    lines.push(format!(
        "func {}(items: [{}]) async throws -> [ProcessedItem] {{",
        spec.name, item_type
    ));
    lines.push(format!(
        "{}try await withThrowingTaskGroup(of: (Int, ProcessedItem).self) {{ group in",
        pad
    ));

    // Fan out: one task per item, tagged with its original index.
    lines.push(format!("{}// Add one task per item", pad2));
    lines.push(format!(
        "{}for (index, item) in items.enumerated() {{",
        pad2
    ));
    lines.push(format!("{}group.addTask {{", pad3));
    lines.push(format!("{}let processed = try await process(item)", pad4));
    lines.push(format!("{}return (index, processed)", pad4));
    lines.push(format!("{}}}", pad3));
    lines.push(format!("{}}}", pad2));
    lines.push(String::new());

    // Fan in: results arrive in completion order.
    lines.push(format!("{}// Collect results as they complete", pad2));
    lines.push(format!("{}var results: [(Int, ProcessedItem)] = []", pad2));
    lines.push(format!("{}for try await result in group {{", pad2));
    lines.push(format!("{}results.append(result)", pad3));
    lines.push(format!("{}}}", pad2));
    lines.push(String::new());

    // The index sort restores input order regardless of completion order.
    lines.push(format!("{}// Restore input order", pad2));
    lines.push(format!(
        "{}return results.sorted(by: {{ $0.0 < $1.0 }}).map {{ $0.1 }}",
        pad2
    ));
    lines.push(format!("{}}}", pad));
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("// Helper function (extension point)".to_string());
    lines.push(format!(
        "private func process(_ item: {}) async throws -> ProcessedItem {{",
        item_type
    ));
    lines.push(format!("{}// TODO: Implement item processing", pad));
    lines.push(format!("{}fatalError(\"Not implemented\")", pad));
    lines.push("}".to_string());

    lines.join("\n")
}
