/// Swiftgen Library - shared Swift code generation logic
///
/// Used by the swiftgen CLI to produce Swift source from artifact specs.

pub mod error;
pub mod field;
pub mod format;
pub mod swift_actor;
pub mod swift_api_client;
pub mod swift_example;
pub mod swift_model;
pub mod swift_task_group;
pub mod swift_view_model;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::error::SpecError;
pub use crate::format::{FormatOptions, SectionMarker};

// Re-export spec types (shared with the CLI)
pub use crate::spec::*;

pub mod spec {
    use super::*;

    /// One named, typed, optionally-absent data member.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct FieldSpec {
        pub name: String,
        pub ty: String,
        pub optional: bool,
    }

    impl FieldSpec {
        pub fn required(name: &str, ty: &str) -> Self {
            Self {
                name: name.to_string(),
                ty: ty.to_string(),
                optional: false,
            }
        }

        pub fn optional(name: &str, ty: &str) -> Self {
            Self {
                name: name.to_string(),
                ty: ty.to_string(),
                optional: true,
            }
        }

        /// Render the Swift type, re-attaching the optional marker.
        pub fn swift_type(&self) -> String {
            if self.optional {
                format!("{}?", self.ty)
            } else {
                self.ty.clone()
            }
        }
    }

    /// The artifact shapes swiftgen knows how to emit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum ArtifactKind {
        Model,
        Actor,
        ApiClient,
        TaskGroup,
        ViewModel,
    }

    /// One remote endpoint: method name plus declared return type.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Endpoint {
        pub name: String,
        pub return_type: String,
    }

    impl Endpoint {
        pub fn new(name: &str, return_type: &str) -> Self {
            Self {
                name: name.to_string(),
                return_type: return_type.to_string(),
            }
        }
    }

    /// Generator-specific boolean options.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ModelFlags {
        pub codable: bool,
        pub identifiable: bool,
        pub with_init: bool,
    }

    impl Default for ModelFlags {
        fn default() -> Self {
            Self {
                codable: true,
                identifiable: false,
                with_init: true,
            }
        }
    }

    /// Complete description of one artifact to generate.
    ///
    /// Field order is preserved end-to-end into the emitted code. Duplicate
    /// field names and unknown type names pass through unvalidated; the
    /// engine never resolves types semantically.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ArtifactSpec {
        pub name: String,
        pub kind: ArtifactKind,
        #[serde(default)]
        pub fields: Vec<FieldSpec>,
        #[serde(default)]
        pub endpoints: Vec<Endpoint>,
        #[serde(default)]
        pub flags: ModelFlags,
        /// Input element type for task-group functions.
        #[serde(default)]
        pub item_type: Option<String>,
    }

    impl ArtifactSpec {
        pub fn new(kind: ArtifactKind, name: &str) -> Self {
            Self {
                name: name.to_string(),
                kind,
                fields: Vec::new(),
                endpoints: Vec::new(),
                flags: ModelFlags::default(),
                item_type: None,
            }
        }
    }
}

/// Generator trait - implement this for each artifact kind
pub trait Generator {
    fn generate(&self, spec: &ArtifactSpec, fmt: &FormatOptions) -> String;
    fn kind(&self) -> ArtifactKind;
}

/// Generate Swift source for `spec` with the generator matching its kind.
pub fn generate(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    debug!("generating {:?} artifact '{}'", spec.kind, spec.name);

    let generator: &dyn Generator = match spec.kind {
        ArtifactKind::Model => &swift_model::SwiftModelGenerator,
        ArtifactKind::Actor => &swift_actor::SwiftActorGenerator,
        ArtifactKind::ApiClient => &swift_api_client::SwiftApiClientGenerator,
        ArtifactKind::TaskGroup => &swift_task_group::SwiftTaskGroupGenerator,
        ArtifactKind::ViewModel => &swift_view_model::SwiftViewModelGenerator,
    };

    generator.generate(spec, fmt)
}
