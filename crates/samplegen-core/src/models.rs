//! Model registry: which models serve which capabilities.
//!
//! A static catalog of well-known model deployments, used for the `models`
//! discovery output and to pick a sensible default deployment name per
//! capability when no value is supplied.

use serde::{Deserialize, Serialize};

use crate::key::Capability;

/// A well-known model and the capabilities it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model name as deployed (e.g., `"gpt-4"`).
    pub name: String,

    /// Which of the sample capabilities the model serves.
    pub capabilities: Vec<Capability>,

    /// One-line description.
    pub description: String,

    /// Context window in tokens.
    pub context_window: u32,
}

impl ModelInfo {
    fn new(
        name: &str,
        capabilities: &[Capability],
        description: &str,
        context_window: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            capabilities: capabilities.to_vec(),
            description: description.to_string(),
            context_window,
        }
    }
}

/// Returns all registered models, in registry order.
///
/// # Examples
///
/// ```
/// use samplegen_core::models::all_models;
///
/// let models = all_models();
/// assert!(models.iter().any(|m| m.name == "gpt-4"));
/// assert!(models.iter().any(|m| m.name == "dall-e-3"));
/// ```
pub fn all_models() -> Vec<ModelInfo> {
    use Capability::*;

    vec![
        ModelInfo::new(
            "gpt-4",
            &[ChatCompletion],
            "Most capable GPT-4 model with vision and advanced reasoning",
            128_000,
        ),
        ModelInfo::new(
            "gpt-4o",
            &[ChatCompletion],
            "GPT-4 Optimized for better performance and lower cost",
            128_000,
        ),
        ModelInfo::new(
            "o1-mini",
            &[ChatCompletion],
            "Reasoning-focused model optimized for complex problem solving",
            65_536,
        ),
        ModelInfo::new(
            "gpt-3.5-turbo",
            &[ChatCompletion],
            "Fast and efficient model for most chat use cases",
            4_096,
        ),
        ModelInfo::new(
            "text-embedding-ada-002",
            &[Embeddings],
            "Most capable embedding model for text similarity and search",
            8_191,
        ),
        ModelInfo::new(
            "dall-e-3",
            &[ImageGeneration],
            "Advanced image generation model",
            4_000,
        ),
    ]
}

/// Looks up a model by name, case-insensitively.
pub fn get_model(name: &str) -> Option<ModelInfo> {
    all_models()
        .into_iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Returns all models serving the given capability, in registry order.
pub fn models_with_capability(capability: Capability) -> Vec<ModelInfo> {
    all_models()
        .into_iter()
        .filter(|m| m.capabilities.contains(&capability))
        .collect()
}

/// The default deployment name for a capability: the first registered
/// model serving it.
pub fn default_model_for(capability: Capability) -> &'static str {
    match capability {
        Capability::ChatCompletion => "gpt-4",
        Capability::Embeddings => "text-embedding-ada-002",
        Capability::ImageGeneration => "dall-e-3",
    }
}
