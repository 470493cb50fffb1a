//! Built-in sample templates embedded at compile time.
//!
//! All `sample.*` template files under `crates/samplegen-store/templates/`
//! are compiled into the binary via [`include_str!`], ensuring they are
//! always available regardless of the runtime filesystem layout (e.g.,
//! after `cargo install`).
//!
//! When adding or removing template files, update the
//! [`builtin_templates`] function accordingly.

use crate::SampleTemplate;

/// The total number of built-in sample templates.
///
/// One template per language/capability/auth-mode combination: 5 languages,
/// 3 capabilities, 2 auth modes. Update this constant when adding or
/// removing template files.
pub const BUILTIN_TEMPLATE_COUNT: usize = 30;

/// Returns all built-in sample templates, compiled into the binary.
///
/// Each template is loaded via [`include_str!`] at compile time from the
/// `templates/` directory relative to this crate's source root. Template
/// names follow the `<language>/<capability>/<auth-mode>` convention.
///
/// # Examples
///
/// ```
/// use samplegen_store::builtin::builtin_templates;
///
/// let templates = builtin_templates();
/// assert_eq!(templates.len(), 30);
/// assert!(templates.iter().any(|t| t.name == "python/chat-completion/key-auth"));
/// ```
pub fn builtin_templates() -> Vec<SampleTemplate> {
    vec![
        // python
        SampleTemplate::new(
            "python/chat-completion/key-auth",
            include_str!("../templates/python/chat-completion/key-auth/sample.py"),
        ),
        SampleTemplate::new(
            "python/chat-completion/entra-auth",
            include_str!("../templates/python/chat-completion/entra-auth/sample.py"),
        ),
        SampleTemplate::new(
            "python/image-generation/key-auth",
            include_str!("../templates/python/image-generation/key-auth/sample.py"),
        ),
        SampleTemplate::new(
            "python/image-generation/entra-auth",
            include_str!("../templates/python/image-generation/entra-auth/sample.py"),
        ),
        SampleTemplate::new(
            "python/embeddings/key-auth",
            include_str!("../templates/python/embeddings/key-auth/sample.py"),
        ),
        SampleTemplate::new(
            "python/embeddings/entra-auth",
            include_str!("../templates/python/embeddings/entra-auth/sample.py"),
        ),
        // javascript
        SampleTemplate::new(
            "javascript/chat-completion/key-auth",
            include_str!("../templates/javascript/chat-completion/key-auth/sample.js"),
        ),
        SampleTemplate::new(
            "javascript/chat-completion/entra-auth",
            include_str!("../templates/javascript/chat-completion/entra-auth/sample.js"),
        ),
        SampleTemplate::new(
            "javascript/image-generation/key-auth",
            include_str!("../templates/javascript/image-generation/key-auth/sample.js"),
        ),
        SampleTemplate::new(
            "javascript/image-generation/entra-auth",
            include_str!("../templates/javascript/image-generation/entra-auth/sample.js"),
        ),
        SampleTemplate::new(
            "javascript/embeddings/key-auth",
            include_str!("../templates/javascript/embeddings/key-auth/sample.js"),
        ),
        SampleTemplate::new(
            "javascript/embeddings/entra-auth",
            include_str!("../templates/javascript/embeddings/entra-auth/sample.js"),
        ),
        // go
        SampleTemplate::new(
            "go/chat-completion/key-auth",
            include_str!("../templates/go/chat-completion/key-auth/sample.go"),
        ),
        SampleTemplate::new(
            "go/chat-completion/entra-auth",
            include_str!("../templates/go/chat-completion/entra-auth/sample.go"),
        ),
        SampleTemplate::new(
            "go/image-generation/key-auth",
            include_str!("../templates/go/image-generation/key-auth/sample.go"),
        ),
        SampleTemplate::new(
            "go/image-generation/entra-auth",
            include_str!("../templates/go/image-generation/entra-auth/sample.go"),
        ),
        SampleTemplate::new(
            "go/embeddings/key-auth",
            include_str!("../templates/go/embeddings/key-auth/sample.go"),
        ),
        SampleTemplate::new(
            "go/embeddings/entra-auth",
            include_str!("../templates/go/embeddings/entra-auth/sample.go"),
        ),
        // java
        SampleTemplate::new(
            "java/chat-completion/key-auth",
            include_str!("../templates/java/chat-completion/key-auth/sample.java"),
        ),
        SampleTemplate::new(
            "java/chat-completion/entra-auth",
            include_str!("../templates/java/chat-completion/entra-auth/sample.java"),
        ),
        SampleTemplate::new(
            "java/image-generation/key-auth",
            include_str!("../templates/java/image-generation/key-auth/sample.java"),
        ),
        SampleTemplate::new(
            "java/image-generation/entra-auth",
            include_str!("../templates/java/image-generation/entra-auth/sample.java"),
        ),
        SampleTemplate::new(
            "java/embeddings/key-auth",
            include_str!("../templates/java/embeddings/key-auth/sample.java"),
        ),
        SampleTemplate::new(
            "java/embeddings/entra-auth",
            include_str!("../templates/java/embeddings/entra-auth/sample.java"),
        ),
        // csharp
        SampleTemplate::new(
            "csharp/chat-completion/key-auth",
            include_str!("../templates/csharp/chat-completion/key-auth/sample.cs"),
        ),
        SampleTemplate::new(
            "csharp/chat-completion/entra-auth",
            include_str!("../templates/csharp/chat-completion/entra-auth/sample.cs"),
        ),
        SampleTemplate::new(
            "csharp/image-generation/key-auth",
            include_str!("../templates/csharp/image-generation/key-auth/sample.cs"),
        ),
        SampleTemplate::new(
            "csharp/image-generation/entra-auth",
            include_str!("../templates/csharp/image-generation/entra-auth/sample.cs"),
        ),
        SampleTemplate::new(
            "csharp/embeddings/key-auth",
            include_str!("../templates/csharp/embeddings/key-auth/sample.cs"),
        ),
        SampleTemplate::new(
            "csharp/embeddings/entra-auth",
            include_str!("../templates/csharp/embeddings/entra-auth/sample.cs"),
        ),
    ]
}
