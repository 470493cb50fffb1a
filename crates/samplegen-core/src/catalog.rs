//! The sample catalog: metadata for every built-in sample plus query and
//! discovery operations.
//!
//! The catalog is a compile-time constant set covering the full
//! language/capability/auth-mode matrix. Lookups come in three forms:
//! stable id (`python-chat-completion-key-auth`), typed key, or the
//! flexible [`resolve`](SampleCatalog::resolve) accepting either spelling.

use crate::error::CoreError;
use crate::key::{AuthMode, Capability, Language, SampleKey};
use crate::metadata::{ApiStyle, Dependency, SampleMetadata, SampleQuery};

/// Catalog of all known samples.
///
/// # Examples
///
/// ```
/// use samplegen_core::{Language, SampleCatalog, SampleQuery};
///
/// let catalog = SampleCatalog::builtin();
/// assert_eq!(catalog.len(), 30);
///
/// let query = SampleQuery {
///     language: Some(Language::Go),
///     ..Default::default()
/// };
/// assert_eq!(catalog.find(&query).len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    samples: Vec<SampleMetadata>,
}

impl SampleCatalog {
    /// Builds the catalog for the built-in sample set: one entry per
    /// language/capability/auth-mode combination.
    pub fn builtin() -> Self {
        let mut samples = Vec::new();
        for language in Language::ALL {
            for capability in Capability::ALL {
                for auth_mode in AuthMode::ALL {
                    let key = SampleKey::new(language, capability, auth_mode);
                    samples.push(SampleMetadata {
                        id: key.id(),
                        key,
                        api_style: ApiStyle::Sync,
                        description: description_for(&key),
                        tags: tags_for(&key),
                        dependencies: dependencies_for(language, auth_mode),
                    });
                }
            }
        }
        Self { samples }
    }

    /// All catalog entries, in matrix order.
    pub fn samples(&self) -> &[SampleMetadata] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns every sample matching the query, in catalog order.
    pub fn find(&self, query: &SampleQuery) -> Vec<&SampleMetadata> {
        self.samples.iter().filter(|m| query.matches(m)).collect()
    }

    /// Looks up a sample by its stable id.
    pub fn get(&self, id: &str) -> Option<&SampleMetadata> {
        self.samples.iter().find(|m| m.id == id)
    }

    /// Looks up a sample by its typed key.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SampleNotFound` with a hint listing available
    /// sample ids if no entry carries the key.
    pub fn get_key(&self, key: &SampleKey) -> Result<&SampleMetadata, CoreError> {
        self.samples
            .iter()
            .find(|m| m.key == *key)
            .ok_or_else(|| self.not_found(&key.to_string()))
    }

    /// Looks up a sample by id or by `/`-separated key path.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SampleNotFound` with a hint listing available
    /// sample ids if the target matches nothing.
    pub fn resolve(&self, target: &str) -> Result<&SampleMetadata, CoreError> {
        if let Some(meta) = self.get(target) {
            return Ok(meta);
        }
        if let Ok(key) = target.parse::<SampleKey>()
            && let Some(meta) = self.samples.iter().find(|m| m.key == key)
        {
            return Ok(meta);
        }
        Err(self.not_found(target))
    }

    /// Languages present among samples matching the query, sorted and
    /// deduplicated.
    pub fn languages(&self, query: &SampleQuery) -> Vec<Language> {
        let mut out: Vec<Language> = self.find(query).iter().map(|m| m.language()).collect();
        out.sort_by_key(|v| v.to_string());
        out.dedup();
        out
    }

    /// Capabilities present among samples matching the query, sorted and
    /// deduplicated.
    pub fn capabilities(&self, query: &SampleQuery) -> Vec<Capability> {
        let mut out: Vec<Capability> = self.find(query).iter().map(|m| m.capability()).collect();
        out.sort_by_key(|v| v.to_string());
        out.dedup();
        out
    }

    /// Auth modes present among samples matching the query, sorted and
    /// deduplicated.
    pub fn auth_modes(&self, query: &SampleQuery) -> Vec<AuthMode> {
        let mut out: Vec<AuthMode> = self.find(query).iter().map(|m| m.auth_mode()).collect();
        out.sort_by_key(|v| v.to_string());
        out.dedup();
        out
    }

    fn not_found(&self, target: &str) -> CoreError {
        let available: Vec<&str> = self.samples.iter().map(|m| m.id.as_str()).collect();
        let hint = if available.is_empty() {
            "No samples are registered.".to_string()
        } else {
            format!("Available samples: {}", available.join(", "))
        };
        CoreError::SampleNotFound(format!("'{target}'. {hint}"))
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn description_for(key: &SampleKey) -> String {
    format!(
        "{} using the {} SDK with {} authentication",
        key.capability.display_name(),
        key.language.display_name(),
        key.auth_mode.display_name(),
    )
}

fn tags_for(key: &SampleKey) -> Vec<String> {
    vec![
        key.capability.tag().to_string(),
        key.language.to_string(),
        key.auth_mode.tag().to_string(),
        "openai-v1".to_string(),
    ]
}

/// Dependencies per language; entra samples add the identity library.
fn dependencies_for(language: Language, auth_mode: AuthMode) -> Vec<Dependency> {
    let mut deps = match language {
        Language::Python => vec![
            Dependency::package("openai", ">=1.84.0"),
            Dependency::runtime("python", ">=3.9"),
        ],
        Language::JavaScript => vec![
            Dependency::package("openai", "^5.0.0"),
            Dependency::runtime("node", ">=20"),
        ],
        Language::Go => vec![
            Dependency::package("github.com/openai/openai-go/v2", "v2.1.0"),
            Dependency::runtime("go", ">=1.22"),
        ],
        Language::Java => vec![
            Dependency::package("com.openai:openai-java", "2.7.0"),
            Dependency::runtime("java", ">=17"),
        ],
        Language::CSharp => vec![
            Dependency::package("OpenAI", "2.1.0"),
            Dependency::runtime("dotnet", ">=8.0"),
        ],
    };

    if auth_mode == AuthMode::Entra {
        let identity = match language {
            Language::Python => Dependency::package("azure-identity", ">=1.17.1"),
            Language::JavaScript => Dependency::package("@azure/identity", "^4.5.0"),
            Language::Go => Dependency::package(
                "github.com/Azure/azure-sdk-for-go/sdk/azidentity",
                "v1.10.0",
            ),
            Language::Java => Dependency::package("com.azure:azure-identity", "1.15.4"),
            Language::CSharp => Dependency::package("Azure.Identity", "1.14.0"),
        };
        deps.insert(1, identity);
    }

    deps
}
