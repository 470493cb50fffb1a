//! Sample template data structure.
//!
//! Contains `SampleTemplate`, the core data type representing a named
//! code sample template with its raw content.

use serde::{Deserialize, Serialize};

/// A named code sample template with its raw content.
///
/// Template names use `/`-separated paths following the
/// `<language>/<capability>/<auth-mode>` convention (e.g.,
/// `"python/chat-completion/key-auth"`). Placeholders in the content use
/// `<%= name %>` markers that are replaced at generation time.
///
/// # Examples
///
/// ```
/// use samplegen_store::SampleTemplate;
///
/// let tmpl = SampleTemplate::new("python/chat-completion/key-auth", "model=\"<%= deploymentName %>\"");
/// assert_eq!(tmpl.name, "python/chat-completion/key-auth");
/// assert!(tmpl.content.contains("<%= deploymentName %>"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleTemplate {
    /// Template identifier (e.g., `"python/chat-completion/key-auth"`).
    pub name: String,

    /// Raw template content with `<%= name %>` placeholder markers.
    pub content: String,
}

impl SampleTemplate {
    /// Creates a new sample template with the given name and content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
