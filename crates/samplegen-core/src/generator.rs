//! Sample generation: render, verify, write.
//!
//! # Architecture
//!
//! Each selected sample goes through four steps: resolve substitution
//! values (stand-in defaults, then configured values, then caller
//! overrides), render the template, verify the output (no leftover
//! placeholder markers, surface syntax), and only then write the source
//! file plus its project scaffolding. Rendering and verification finish
//! in memory before anything touches disk, so a failing sample writes no
//! files at all.
//!
//! Failures are isolated per sample: a missing substitution fails that
//! sample and the run continues with the rest.
//!
//! # Example
//!
//! ```no_run
//! # fn example() -> Result<(), samplegen_core::CoreError> {
//! use samplegen_core::{GenConfig, GenOptions, Generator, SampleQuery};
//!
//! let generator = Generator::new(GenConfig::default())?;
//! let report = generator.generate(&SampleQuery::default(), &GenOptions::default());
//! println!("{} samples written", report.rendered_count());
//! for detail in report.failure_details() {
//!     eprintln!("FAILED: {detail}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use samplegen_store::{TemplateError, TemplateStore};
use tracing::{debug, info};

use crate::catalog::SampleCatalog;
use crate::config::GenConfig;
use crate::error::CoreError;
use crate::metadata::{SampleMetadata, SampleQuery};
use crate::models::default_model_for;
use crate::project;
use crate::syntax;

/// Stand-in endpoint host substituted when no real value is supplied.
pub const DEFAULT_ENDPOINT: &str = "<your-resource>.openai.azure.com";

/// Stand-in API key substituted when no real value is supplied.
pub const DEFAULT_API_KEY: &str = "<your-api-key>";

/// Options for a single generation run.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Output directory override; falls back to the configured one.
    pub output_dir: Option<PathBuf>,

    /// Highest-precedence substitution values.
    pub overrides: HashMap<String, String>,

    /// When `false`, the stand-in defaults layer is omitted and every
    /// placeholder must be covered by configured values or overrides.
    pub use_defaults: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            overrides: HashMap::new(),
            use_defaults: true,
        }
    }
}

/// A sample that failed to generate, with the reason.
#[derive(Debug)]
pub struct GenFailure {
    /// Identifier of the failed sample.
    pub id: String,
    /// What went wrong.
    pub error: CoreError,
}

/// Outcome of a generation run.
///
/// # Example
///
/// ```
/// use samplegen_core::GenReport;
///
/// let report = GenReport::default();
/// assert!(report.is_success());
/// assert_eq!(report.rendered_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct GenReport {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,

    /// Identifiers of samples that rendered and verified successfully.
    pub rendered: Vec<String>,

    /// Identifiers of samples excluded by the configuration.
    pub skipped: Vec<String>,

    /// Samples that failed, with reasons. A failed sample writes no
    /// files.
    pub failures: Vec<GenFailure>,
}

impl GenReport {
    /// Returns `true` if no sample failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of samples that rendered successfully.
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// Returns `true` if the run selected nothing at all.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty() && self.skipped.is_empty() && self.failures.is_empty()
    }

    /// Returns one formatted line per failure for diagnostic output.
    pub fn failure_details(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|f| format!("{}: {}", f.id, f.error))
            .collect()
    }
}

/// A sample rendered and verified in memory, ready to write.
#[derive(Debug, Clone)]
pub struct RenderedSample {
    /// Catalog entry this sample was rendered from.
    pub metadata: SampleMetadata,
    /// Rendered source code with every placeholder substituted.
    pub source: String,
}

/// Renders catalog samples from the template store and writes them to
/// disk along with their project scaffolding.
pub struct Generator {
    catalog: SampleCatalog,
    store: TemplateStore,
    config: GenConfig,
}

impl Generator {
    /// Creates a generator over the builtin catalog and templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a builtin template fails to parse.
    pub fn new(config: GenConfig) -> Result<Self, CoreError> {
        Ok(Self {
            catalog: SampleCatalog::builtin(),
            store: TemplateStore::with_builtin_templates()?,
            config,
        })
    }

    /// Creates a generator over a caller-supplied catalog and store,
    /// e.g. templates loaded from a directory.
    pub fn with_parts(catalog: SampleCatalog, store: TemplateStore, config: GenConfig) -> Self {
        Self {
            catalog,
            store,
            config,
        }
    }

    pub fn catalog(&self) -> &SampleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Resolves the substitution values for one sample.
    ///
    /// Values layer in increasing precedence: stand-in defaults (unless
    /// disabled), configured values, then caller overrides. Extra values
    /// a template never references are harmless.
    pub fn substitutions_for(
        &self,
        metadata: &SampleMetadata,
        opts: &GenOptions,
    ) -> HashMap<String, String> {
        let mut values = HashMap::new();
        if opts.use_defaults {
            values.insert("openai_v1_endpoint".to_string(), DEFAULT_ENDPOINT.to_string());
            values.insert(
                "deploymentName".to_string(),
                default_model_for(metadata.capability()).to_string(),
            );
            values.insert("apiKey".to_string(), DEFAULT_API_KEY.to_string());
        }
        values.extend(self.config.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        values.extend(opts.overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        values
    }

    /// Returns the raw template text for a sample, markers intact.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::TemplateNotFound` if the store has no
    /// template under the sample's key.
    pub fn template_source(&self, metadata: &SampleMetadata) -> Result<&str, CoreError> {
        let name = metadata.key.to_string();
        let template = self
            .store
            .get_template(&name)
            .ok_or(TemplateError::TemplateNotFound(name))?;
        Ok(&template.content)
    }

    /// Renders one sample fully in memory and verifies the result.
    ///
    /// # Errors
    ///
    /// Returns the store's error for unknown templates or missing
    /// substitutions, and a syntax error if the rendered output fails the
    /// surface check.
    pub fn render_sample(
        &self,
        metadata: &SampleMetadata,
        opts: &GenOptions,
    ) -> Result<RenderedSample, CoreError> {
        let template = metadata.key.to_string();
        let values = self.substitutions_for(metadata, opts);
        let source = self.store.render(&template, &values)?;

        syntax::check_source(metadata.language(), &source).map_err(|reason| {
            CoreError::SyntaxError {
                file: format!("{template}/{}", metadata.language().source_file_name()),
                reason,
            }
        })?;

        Ok(RenderedSample {
            metadata: metadata.clone(),
            source,
        })
    }

    /// Renders and writes every sample the query selects.
    ///
    /// Writes each sample under
    /// `<out>/<language>/<capability>/<auth-mode>/`: the source file, the
    /// language's dependency manifest, and a README.
    pub fn generate(&self, query: &SampleQuery, opts: &GenOptions) -> GenReport {
        self.run(query, opts, true)
    }

    /// Renders and verifies every sample the query selects without
    /// writing anything.
    pub fn check(&self, query: &SampleQuery, opts: &GenOptions) -> GenReport {
        self.run(query, opts, false)
    }

    fn run(&self, query: &SampleQuery, opts: &GenOptions, write_output: bool) -> GenReport {
        let out_dir = opts
            .output_dir
            .clone()
            .unwrap_or_else(|| self.config.output_dir.clone());
        let selected = self.catalog.find(query);
        info!(
            samples = selected.len(),
            write = write_output,
            out_dir = %out_dir.display(),
            "Generating samples",
        );

        let mut report = GenReport::default();
        for metadata in selected {
            if !self
                .config
                .allows(metadata.language(), metadata.capability(), metadata.auth_mode())
            {
                debug!(id = %metadata.id, "Sample excluded by configuration");
                report.skipped.push(metadata.id.clone());
                continue;
            }

            debug!(id = %metadata.id, "Rendering sample");
            let rendered = match self.render_sample(metadata, opts) {
                Ok(rendered) => rendered,
                Err(error) => {
                    info!(id = %metadata.id, error = %error, "Sample failed");
                    report.failures.push(GenFailure {
                        id: metadata.id.clone(),
                        error,
                    });
                    continue;
                }
            };

            if write_output {
                match write_sample(&out_dir, &rendered) {
                    Ok(mut files) => report.written.append(&mut files),
                    Err(error) => {
                        info!(id = %metadata.id, error = %error, "Sample failed");
                        report.failures.push(GenFailure {
                            id: metadata.id.clone(),
                            error,
                        });
                        continue;
                    }
                }
            }
            report.rendered.push(metadata.id.clone());
        }

        info!(
            rendered = report.rendered_count(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "Generation finished",
        );
        report
    }
}

/// Writes a rendered sample's three files and returns their paths.
fn write_sample(out_dir: &Path, rendered: &RenderedSample) -> Result<Vec<PathBuf>, CoreError> {
    let metadata = &rendered.metadata;
    let dir = out_dir
        .join(metadata.language().to_string())
        .join(metadata.capability().to_string())
        .join(metadata.auth_mode().to_string());
    fs::create_dir_all(&dir)?;

    let mut written = Vec::with_capacity(3);

    let source_path = dir.join(metadata.language().source_file_name());
    fs::write(&source_path, &rendered.source)?;
    written.push(source_path);

    let (manifest_name, manifest) = project::project_file(metadata);
    let manifest_path = dir.join(manifest_name);
    fs::write(&manifest_path, manifest)?;
    written.push(manifest_path);

    let readme_path = dir.join("README.md");
    fs::write(&readme_path, project::readme(metadata))?;
    written.push(readme_path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{AuthMode, Capability, Language};
    use samplegen_store::TemplateError;

    fn generator() -> Generator {
        Generator::new(GenConfig::default()).expect("builtin generator")
    }

    fn query(language: Language, capability: Capability, auth_mode: AuthMode) -> SampleQuery {
        SampleQuery {
            language: Some(language),
            capability: Some(capability),
            auth_mode: Some(auth_mode),
            ..SampleQuery::default()
        }
    }

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ── substitution layering ───────────────────────────────────────────

    #[test]
    fn test_should_layer_overrides_above_config_values_above_defaults() {
        let mut config = GenConfig::default();
        config
            .values
            .insert("openai_v1_endpoint".to_string(), "from-config".to_string());
        config
            .values
            .insert("deploymentName".to_string(), "from-config".to_string());
        let generator = Generator::new(config).expect("generator");

        let meta = generator
            .catalog()
            .get("python-chat-completion-key-auth")
            .expect("builtin sample")
            .clone();
        let opts = GenOptions {
            overrides: overrides(&[("deploymentName", "from-override")]),
            ..GenOptions::default()
        };

        let values = generator.substitutions_for(&meta, &opts);
        assert_eq!(values["openai_v1_endpoint"], "from-config");
        assert_eq!(values["deploymentName"], "from-override");
        assert_eq!(values["apiKey"], DEFAULT_API_KEY);
    }

    #[test]
    fn test_should_pick_default_model_per_capability() {
        let generator = generator();
        let opts = GenOptions::default();

        let chat = generator
            .catalog()
            .get("go-chat-completion-key-auth")
            .expect("sample")
            .clone();
        let embeddings = generator
            .catalog()
            .get("go-embeddings-key-auth")
            .expect("sample")
            .clone();

        assert_eq!(
            generator.substitutions_for(&chat, &opts)["deploymentName"],
            "gpt-4"
        );
        assert_eq!(
            generator.substitutions_for(&embeddings, &opts)["deploymentName"],
            "text-embedding-ada-002"
        );
    }

    // ── rendering ───────────────────────────────────────────────────────

    #[test]
    fn test_should_expose_raw_template_text_with_markers() {
        let generator = generator();
        let meta = generator
            .catalog()
            .get("go-chat-completion-key-auth")
            .expect("sample")
            .clone();

        let source = generator.template_source(&meta).expect("template");
        assert!(source.contains("<%= openai_v1_endpoint %>"), "unexpected: {source}");
    }

    #[test]
    fn test_should_substitute_every_occurrence_and_leave_no_markers() {
        let generator = generator();
        let meta = generator
            .catalog()
            .get("javascript-chat-completion-key-auth")
            .expect("sample")
            .clone();

        let rendered = generator
            .render_sample(&meta, &GenOptions::default())
            .expect("render");
        assert!(!rendered.source.contains("<%"), "marker residue: {}", rendered.source);
        assert!(!rendered.source.contains("%>"), "marker residue: {}", rendered.source);
    }

    #[test]
    fn test_should_render_exact_endpoint_and_model_literals() {
        let generator = generator();
        let meta = generator
            .catalog()
            .get("python-chat-completion-key-auth")
            .expect("sample")
            .clone();
        let opts = GenOptions {
            overrides: overrides(&[
                ("openai_v1_endpoint", "api.example.com"),
                ("deploymentName", "gpt-4"),
            ]),
            ..GenOptions::default()
        };

        let rendered = generator.render_sample(&meta, &opts).expect("render");
        assert!(
            rendered
                .source
                .contains("base_url=f\"https://api.example.com/openai/v1\""),
            "unexpected source:\n{}",
            rendered.source
        );
        assert!(
            rendered.source.contains("model=\"gpt-4\""),
            "unexpected source:\n{}",
            rendered.source
        );
    }

    #[test]
    fn test_should_fail_with_missing_substitution_without_defaults() {
        let generator = generator();
        let meta = generator
            .catalog()
            .get("python-chat-completion-key-auth")
            .expect("sample")
            .clone();
        let opts = GenOptions {
            use_defaults: false,
            overrides: overrides(&[
                ("openai_v1_endpoint", "api.example.com"),
                ("deploymentName", "gpt-4"),
            ]),
            ..GenOptions::default()
        };

        let err = generator.render_sample(&meta, &opts).unwrap_err();
        match err {
            CoreError::TemplateError(TemplateError::MissingSubstitution {
                placeholder, ..
            }) => {
                assert_eq!(placeholder, "apiKey");
            }
            other => panic!("expected missing substitution, got {other}"),
        }
    }

    #[test]
    fn test_should_reject_marker_text_smuggled_through_values() {
        let generator = generator();
        let meta = generator
            .catalog()
            .get("python-chat-completion-key-auth")
            .expect("sample")
            .clone();
        let opts = GenOptions {
            overrides: overrides(&[("deploymentName", "gpt-4 <%= nested %>")]),
            ..GenOptions::default()
        };

        let err = generator.render_sample(&meta, &opts).unwrap_err();
        assert!(
            matches!(&err, CoreError::SyntaxError { .. }),
            "expected syntax rejection, got {err}"
        );
    }

    // ── generation to disk ──────────────────────────────────────────────

    #[test]
    fn test_should_write_sample_with_scaffolding_under_key_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let generator = generator();
        let opts = GenOptions {
            output_dir: Some(tmp.path().to_path_buf()),
            ..GenOptions::default()
        };

        let report = generator.generate(
            &query(Language::Python, Capability::ChatCompletion, AuthMode::Key),
            &opts,
        );

        assert!(report.is_success(), "failures: {:?}", report.failure_details());
        assert_eq!(report.rendered, vec!["python-chat-completion-key-auth"]);

        let dir = tmp.path().join("python/chat-completion/key-auth");
        let source = fs::read_to_string(dir.join("sample.py")).expect("sample.py");
        assert!(source.contains("from openai import OpenAI"));
        assert!(dir.join("requirements.txt").is_file());
        assert!(dir.join("README.md").is_file());
        assert_eq!(report.written.len(), 3);
    }

    #[test]
    fn test_should_isolate_failures_and_write_nothing_for_failed_samples() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let generator = generator();
        // Without defaults, key-auth samples miss apiKey while entra-auth
        // samples stay fully covered.
        let opts = GenOptions {
            output_dir: Some(tmp.path().to_path_buf()),
            use_defaults: false,
            overrides: overrides(&[
                ("openai_v1_endpoint", "api.example.com"),
                ("deploymentName", "gpt-4"),
            ]),
            ..GenOptions::default()
        };
        let selection = SampleQuery {
            language: Some(Language::Python),
            capability: Some(Capability::ChatCompletion),
            ..SampleQuery::default()
        };

        let report = generator.generate(&selection, &opts);

        assert_eq!(report.rendered, vec!["python-chat-completion-entra-auth"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "python-chat-completion-key-auth");
        assert!(tmp.path().join("python/chat-completion/entra-auth/sample.py").is_file());
        // the failed sample must leave no files behind
        assert!(!tmp.path().join("python/chat-completion/key-auth").exists());
    }

    #[test]
    fn test_should_respect_config_exclusions() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = GenConfig {
            languages: vec![Language::Go],
            ..GenConfig::default()
        };
        let generator = Generator::new(config).expect("generator");
        let opts = GenOptions {
            output_dir: Some(tmp.path().to_path_buf()),
            ..GenOptions::default()
        };
        let selection = SampleQuery {
            capability: Some(Capability::Embeddings),
            auth_mode: Some(AuthMode::Key),
            ..SampleQuery::default()
        };

        let report = generator.generate(&selection, &opts);

        assert_eq!(report.rendered, vec!["go-embeddings-key-auth"]);
        assert_eq!(report.skipped.len(), 4);
        assert!(!tmp.path().join("python").exists());
    }

    // ── full-catalog verification ───────────────────────────────────────

    #[test]
    fn test_should_verify_every_builtin_sample_with_defaults() {
        let generator = generator();
        let report = generator.check(&SampleQuery::default(), &GenOptions::default());

        assert!(report.is_success(), "failures: {:?}", report.failure_details());
        assert_eq!(report.rendered_count(), generator.catalog().len());
        assert!(report.written.is_empty(), "check must not write files");
    }
}
