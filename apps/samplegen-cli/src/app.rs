//! Application state and logic.
//!
//! Thin facade over [`Generator`]: each CLI subcommand maps to one method
//! that runs the operation and renders its output as text or JSON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use samplegen_core::{
    Capability, GenConfig, GenOptions, GenReport, Generator, SampleCatalog, SampleQuery, models,
};
use samplegen_store::TemplateStore;

use crate::cli::ValueArgs;
use crate::fmt_utils::truncate_str;

pub struct App {
    generator: Generator,
}

impl App {
    /// Builds the app from a config path and an optional directory of
    /// custom templates layered over the builtin set.
    pub fn new(config_path: &Path, templates_dir: Option<&Path>) -> Result<Self> {
        let config = GenConfig::load_or_default(config_path)?;
        let generator = match templates_dir {
            Some(dir) => {
                let mut store =
                    TemplateStore::with_builtin_templates().context("loading builtin templates")?;
                store
                    .load_from_dir(dir)
                    .with_context(|| format!("loading templates from {}", dir.display()))?;
                Generator::with_parts(SampleCatalog::builtin(), store, config)
            }
            None => Generator::new(config).context("loading builtin templates")?,
        };
        Ok(Self { generator })
    }

    /// Lists the samples matching the query.
    pub fn list(&self, query: &SampleQuery, json: bool) -> Result<()> {
        let samples = self.generator.catalog().find(query);
        if json {
            println!("{}", serde_json::to_string_pretty(&samples)?);
            return Ok(());
        }
        if samples.is_empty() {
            println!("No samples match the given filters.");
            return Ok(());
        }

        println!(
            "{:<40} {:<12} {:<17} {:<11} DESCRIPTION",
            "ID", "LANGUAGE", "CAPABILITY", "AUTH"
        );
        for meta in samples {
            println!(
                "{:<40} {:<12} {:<17} {:<11} {}",
                meta.id,
                meta.language(),
                meta.capability(),
                meta.auth_mode(),
                truncate_str(&meta.description, 48),
            );
        }
        Ok(())
    }

    /// Shows one sample's metadata and template text, or its source
    /// rendered with the stand-in defaults.
    pub fn show(&self, target: &str, rendered: bool, json: bool) -> Result<()> {
        let meta = self.generator.catalog().resolve(target)?;

        if rendered {
            let sample = self.generator.render_sample(meta, &GenOptions::default())?;
            print!("{}", sample.source);
            return Ok(());
        }
        if json {
            println!("{}", serde_json::to_string_pretty(meta)?);
            return Ok(());
        }

        println!("Sample:      {}", meta.id);
        println!("Language:    {}", meta.language().display_name());
        println!("Capability:  {}", meta.capability().display_name());
        println!("Auth mode:   {}", meta.auth_mode().display_name());
        println!("API style:   {}", meta.api_style);
        println!("Description: {}", meta.description);
        println!("Tags:        {}", meta.tags.join(", "));
        println!("Dependencies:");
        for dep in &meta.dependencies {
            println!("  {} {} ({})", dep.name, dep.version, dep.kind);
        }
        println!("Template:");
        print!("{}", self.generator.template_source(meta)?);
        Ok(())
    }

    /// Renders the selected samples and writes them to the output
    /// directory.
    pub fn generate(
        &self,
        query: &SampleQuery,
        values: &ValueArgs,
        out: Option<PathBuf>,
    ) -> Result<()> {
        let opts = self.gen_options(values, out)?;
        let report = self.generator.generate(query, &opts);
        for path in &report.written {
            println!("  wrote {}", path.display());
        }
        print_summary(&report, "generated")
    }

    /// Renders and verifies the selected samples without writing files.
    pub fn check(&self, query: &SampleQuery, values: &ValueArgs) -> Result<()> {
        let opts = self.gen_options(values, None)?;
        let report = self.generator.check(query, &opts);
        print_summary(&report, "verified")
    }

    /// Lists deployable models, optionally narrowed to one capability.
    pub fn models(&self, capability: Option<Capability>, json: bool) -> Result<()> {
        let models = match capability {
            Some(capability) => models::models_with_capability(capability),
            None => models::all_models(),
        };
        if json {
            println!("{}", serde_json::to_string_pretty(&models)?);
            return Ok(());
        }

        println!("{:<24} {:>9}  CAPABILITIES", "MODEL", "CONTEXT");
        for model in &models {
            let capabilities: Vec<String> =
                model.capabilities.iter().map(ToString::to_string).collect();
            println!(
                "{:<24} {:>9}  {}",
                model.name,
                model.context_window,
                capabilities.join(", ")
            );
        }
        Ok(())
    }

    /// Translates CLI value flags into generation options.
    fn gen_options(&self, values: &ValueArgs, out: Option<PathBuf>) -> Result<GenOptions> {
        let mut overrides = HashMap::new();
        for pair in &values.set {
            let Some((name, value)) = pair.split_once('=') else {
                bail!("invalid --set value '{pair}': expected NAME=VALUE");
            };
            overrides.insert(name.trim().to_string(), value.to_string());
        }
        Ok(GenOptions {
            output_dir: out,
            overrides,
            use_defaults: !values.no_defaults,
        })
    }
}

fn print_summary(report: &GenReport, verb: &str) -> Result<()> {
    if report.is_empty() {
        println!("No samples match the given filters.");
        return Ok(());
    }
    println!(
        "{} samples {verb}, {} skipped by config, {} failed",
        report.rendered_count(),
        report.skipped.len(),
        report.failures.len(),
    );
    for detail in report.failure_details() {
        eprintln!("FAILED: {detail}");
    }
    if !report.is_success() {
        bail!(
            "{} of {} samples failed",
            report.failures.len(),
            report.failures.len() + report.rendered_count()
        );
    }
    Ok(())
}
