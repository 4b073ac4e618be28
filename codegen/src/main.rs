use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use swiftgen_lib::{
    field, swift_example, ArtifactKind, ArtifactSpec, Endpoint, FieldSpec, FormatOptions,
    SectionMarker,
};

#[derive(Parser)]
#[command(name = "swiftgen")]
#[command(about = "Generate Swift source code from artifact specs")]
struct Args {
    /// Artifact kind (model, actor, api-client, task-group, viewmodel)
    #[arg(short, long, default_value = "model")]
    kind: String,

    /// Name of the generated type or function
    #[arg(short, long)]
    name: Option<String>,

    /// Comma-separated field specs (format: name:Type or name:Type? for optional)
    #[arg(short, long)]
    properties: Option<String>,

    /// Comma-separated endpoint specs for api-client (format: name:ReturnType)
    #[arg(long)]
    endpoints: Option<String>,

    /// Input item type for task-group functions
    #[arg(long, default_value = "Item")]
    item_type: String,

    /// Read a complete artifact spec from a JSON file instead of flags
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Don't add Codable conformance
    #[arg(long)]
    no_codable: bool,

    /// Add Identifiable conformance
    #[arg(long)]
    identifiable: bool,

    /// Don't generate the custom initializer
    #[arg(long)]
    no_init: bool,

    /// Append example usage after the generated model
    #[arg(long)]
    example: bool,

    /// Indentation width in spaces
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Plain `// Section` comments instead of `// MARK: - Section`
    #[arg(long)]
    plain_sections: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let fmt = FormatOptions {
        indent_width: args.indent,
        section_marker: if args.plain_sections {
            SectionMarker::Plain
        } else {
            SectionMarker::Mark
        },
    };

    let spec = build_spec(&args)?;
    let mut code = swiftgen_lib::generate(&spec, &fmt);

    if args.example && spec.kind == ArtifactKind::Model {
        let example = swift_example::generate_example(&spec, &fmt);
        code = format!("{}\n\n{}", code, example);
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", code))?;
            eprintln!("✅ Generated {} at {}", spec.name, path.display());
        }
        None => println!("{}", code),
    }

    Ok(())
}

fn build_spec(args: &Args) -> Result<ArtifactSpec> {
    if let Some(path) = &args.spec {
        let json = std::fs::read_to_string(path)?;
        let spec: ArtifactSpec = serde_json::from_str(&json)?;
        return Ok(spec);
    }

    let kind = match args.kind.as_str() {
        "model" => ArtifactKind::Model,
        "actor" => ArtifactKind::Actor,
        "api-client" => ArtifactKind::ApiClient,
        "task-group" => ArtifactKind::TaskGroup,
        "viewmodel" => ArtifactKind::ViewModel,
        other => bail!("Unsupported kind: {}", other),
    };

    let Some(name) = &args.name else {
        bail!("--name is required unless --spec is given");
    };

    let mut spec = ArtifactSpec::new(kind, name);
    spec.flags.codable = !args.no_codable;
    spec.flags.identifiable = args.identifiable;
    spec.flags.with_init = !args.no_init;

    match kind {
        ArtifactKind::Model => {
            let Some(properties) = &args.properties else {
                bail!("--properties is required for model artifacts");
            };
            spec.fields = field::parse_field_list(properties)?;
        }
        ArtifactKind::Actor => {
            spec.fields = match &args.properties {
                Some(properties) => field::parse_field_list(properties)?,
                // Default actor state; "[String: Any]" cannot be written in
                // the property grammar, so it is constructed directly.
                None => vec![
                    FieldSpec::required("data", "[String: Any]"),
                    FieldSpec::optional("lastUpdated", "Date"),
                ],
            };
        }
        ArtifactKind::ApiClient => {
            spec.endpoints = match &args.endpoints {
                Some(endpoints) => field::parse_endpoint_list(endpoints)?,
                None => vec![
                    Endpoint::new("fetchItems", "[Item]"),
                    Endpoint::new("fetchItem", "Item"),
                ],
            };
        }
        ArtifactKind::TaskGroup => {
            spec.item_type = Some(args.item_type.clone());
        }
        ArtifactKind::ViewModel => {}
    }

    Ok(spec)
}
