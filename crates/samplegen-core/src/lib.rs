//! Samplegen Core Generation Engine
//!
//! The core engine for generating runnable API code samples. Provides
//! the sample catalog, the generation pipeline, configuration loading,
//! syntax surface checks, and per-language project scaffolding around
//! the template store.
//!
//! # Architecture
//!
//! - [`Generator`] orchestrates render, verify, and write per sample
//! - [`SampleCatalog`] enumerates the builtin language/capability/auth matrix
//! - [`SampleKey`] identifies one sample as language/capability/auth-mode
//! - [`GenConfig`] holds generation configuration from `samplegen.yml`
//! - [`syntax`] performs surface validity checks on rendered output
//! - [`project`] builds per-language dependency manifests and READMEs
//! - [`models`](crate::models) lists deployable models per capability

pub mod catalog;
pub mod config;
mod error;
mod generator;
mod key;
mod metadata;
pub mod models;
pub mod project;
pub mod syntax;

pub use catalog::SampleCatalog;
pub use config::{DEFAULT_CONFIG_FILE, GenConfig};
pub use error::CoreError;
pub use generator::{
    DEFAULT_API_KEY, DEFAULT_ENDPOINT, GenFailure, GenOptions, GenReport, Generator,
    RenderedSample,
};
pub use key::{AuthMode, Capability, Language, SampleKey};
pub use metadata::{ApiStyle, Dependency, DependencyKind, SampleMetadata, SampleQuery};
pub use models::ModelInfo;
