//! Sample metadata and query types.
//!
//! `SampleMetadata` describes one catalog entry: identity, description,
//! tags, and the dependencies the generated sample needs. `SampleQuery`
//! is the filter used by catalog searches and discovery operations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::key::{AuthMode, Capability, Language, SampleKey};

/// Whether a sample demonstrates blocking or non-blocking API usage.
///
/// The built-in set is entirely `Sync`; the axis exists so loaded template
/// sets can carry async variants without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStyle {
    #[default]
    Sync,
    Async,
}

impl std::fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sync => write!(f, "sync"),
            Self::Async => write!(f, "async"),
        }
    }
}

impl FromStr for ApiStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            other => Err(format!("unknown api style: {other}")),
        }
    }
}

impl serde::Serialize for ApiStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ApiStyle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<ApiStyle>().map_err(serde::de::Error::custom)
    }
}

/// Classification of a sample dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// A library installed through the language's package manager.
    Package,
    /// A language runtime or toolchain requirement.
    Runtime,
    /// An external command-line tool.
    Tool,
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Package => "package",
            Self::Runtime => "runtime",
            Self::Tool => "tool",
        };
        write!(f, "{s}")
    }
}

/// A single dependency of a generated sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    /// Package, runtime, or tool name as the language ecosystem spells it.
    pub name: String,

    /// Version or version requirement (e.g., `"2.1.0"`, `">=1.84.0"`).
    pub version: String,

    /// What kind of dependency this is.
    pub kind: DependencyKind,
}

impl Dependency {
    /// Creates a package dependency.
    pub fn package(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind: DependencyKind::Package,
        }
    }

    /// Creates a runtime dependency.
    pub fn runtime(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind: DependencyKind::Runtime,
        }
    }
}

/// Catalog metadata for one sample.
///
/// # Examples
///
/// ```
/// use samplegen_core::SampleCatalog;
///
/// let catalog = SampleCatalog::builtin();
/// let meta = catalog.get("python-chat-completion-key-auth").unwrap();
/// assert_eq!(meta.key.to_string(), "python/chat-completion/key-auth");
/// assert!(!meta.dependencies.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleMetadata {
    /// Stable identifier (`-`-joined form of the key).
    pub id: String,

    /// The language/capability/auth-mode triple.
    pub key: SampleKey,

    /// Blocking or non-blocking API usage.
    pub api_style: ApiStyle,

    /// One-sentence description shown in listings and READMEs.
    pub description: String,

    /// Free-form lowercase tags for filtering.
    pub tags: Vec<String>,

    /// Dependencies the generated sample needs.
    pub dependencies: Vec<Dependency>,
}

impl SampleMetadata {
    pub fn language(&self) -> Language {
        self.key.language
    }

    pub fn capability(&self) -> Capability {
        self.key.capability
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.key.auth_mode
    }
}

/// Filter for catalog searches.
///
/// Every set field must match for a sample to be included; an empty query
/// matches everything.
///
/// # Examples
///
/// ```
/// use samplegen_core::{Capability, SampleCatalog, SampleQuery};
///
/// let catalog = SampleCatalog::builtin();
/// let query = SampleQuery {
///     capability: Some(Capability::Embeddings),
///     ..Default::default()
/// };
/// assert_eq!(catalog.find(&query).len(), 10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleQuery {
    pub language: Option<Language>,
    pub capability: Option<Capability>,
    pub auth_mode: Option<AuthMode>,
    pub api_style: Option<ApiStyle>,
    pub tag: Option<String>,
}

impl SampleQuery {
    /// Returns `true` if the sample passes every set filter.
    pub fn matches(&self, meta: &SampleMetadata) -> bool {
        if let Some(language) = self.language
            && meta.language() != language
        {
            return false;
        }
        if let Some(capability) = self.capability
            && meta.capability() != capability
        {
            return false;
        }
        if let Some(auth_mode) = self.auth_mode
            && meta.auth_mode() != auth_mode
        {
            return false;
        }
        if let Some(api_style) = self.api_style
            && meta.api_style != api_style
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !meta.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        {
            return false;
        }
        true
    }
}
