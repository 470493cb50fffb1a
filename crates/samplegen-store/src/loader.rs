//! Template loader for loading `sample.*` files from a directory.
//!
//! Recursively walks a directory, loading all files with stem `sample` and
//! deriving template names from their relative parent paths (e.g.,
//! `python/chat-completion/key-auth` from
//! `python/chat-completion/key-auth/sample.py`).

use std::path::Path;

use crate::{SampleTemplate, TemplateError};

/// Recursively loads all `sample.*` template files from the given directory.
///
/// Template names are derived from the relative parent path with `/`
/// separator; the file name itself only contributes the language's source
/// extension and is matched case-insensitively (`sample.py` and `Sample.java`
/// both qualify).
///
/// # Examples
///
/// Given a directory structure:
/// ```text
/// templates/
/// ├── python/
/// │   └── chat-completion/
/// │       ├── key-auth/
/// │       │   └── sample.py
/// │       └── entra-auth/
/// │           └── sample.py
/// └── java/
///     └── embeddings/
///         └── key-auth/
///             └── Sample.java
/// ```
///
/// This produces templates named `python/chat-completion/key-auth`,
/// `python/chat-completion/entra-auth`, and `java/embeddings/key-auth`.
///
/// # Errors
///
/// Returns `TemplateError::IoError` if the directory cannot be read or a
/// file cannot be opened.
pub fn load_templates_from_dir(dir: &Path) -> Result<Vec<SampleTemplate>, TemplateError> {
    let mut templates = Vec::new();
    load_templates_recursive(dir, dir, &mut templates)?;
    Ok(templates)
}

/// Recursively walks directory entries, collecting `sample.*` templates.
fn load_templates_recursive(
    base: &Path,
    current: &Path,
    templates: &mut Vec<SampleTemplate>,
) -> Result<(), TemplateError> {
    let entries = std::fs::read_dir(current)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(base, &path, templates)?;
        } else if is_sample_file(&path) {
            let relative = path
                .strip_prefix(base)
                .map_err(|e| TemplateError::IoError(std::io::Error::other(e)))?;

            // Build template name: relative parent path, using `/` separator
            let name = relative
                .parent()
                .map(|p| {
                    p.components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                        .join("/")
                })
                .unwrap_or_default();

            if name.is_empty() {
                tracing::debug!(path = %path.display(), "Skipping sample file without a key path");
                continue;
            }

            let content = std::fs::read_to_string(&path)?;
            templates.push(SampleTemplate::new(name, content));
        }
    }
    Ok(())
}

fn is_sample_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("sample"))
}
