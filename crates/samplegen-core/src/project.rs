//! Project scaffolding emitted alongside each generated sample.
//!
//! Every sample ships with the dependency manifest its toolchain expects
//! (`requirements.txt`, `package.json`, `go.mod`, `pom.xml`, or a
//! `.csproj`) plus a `README.md` with setup and run instructions. All
//! builders are pure text producers; writing to disk is the generator's
//! job.

use serde_json::json;

use crate::key::{AuthMode, Language};
use crate::metadata::{Dependency, DependencyKind, SampleMetadata};

/// Builds the dependency manifest for a sample.
///
/// Returns the file name and its full content. The name follows the
/// language's own convention, e.g. `requirements.txt` for Python and
/// `Sample.csproj` for C#.
pub fn project_file(metadata: &SampleMetadata) -> (String, String) {
    let name = metadata.language().project_file_name().to_string();
    let content = match metadata.language() {
        Language::Python => requirements_txt(metadata),
        Language::JavaScript => package_json(metadata),
        Language::Go => go_mod(metadata),
        Language::Java => pom_xml(metadata),
        Language::CSharp => csproj(metadata),
    };
    (name, content)
}

/// Builds the README for a sample: what it is, what it needs, how to run
/// it.
pub fn readme(metadata: &SampleMetadata) -> String {
    let language = metadata.language();
    let mut out = format!("# {}\n\n", metadata.description);
    out.push_str(&format!(
        "A minimal {} sample calling the OpenAI v1 API surface with {} authentication.\n\n",
        language.display_name(),
        metadata.auth_mode().display_name()
    ));

    out.push_str("## Prerequisites\n\n");
    if let Some(runtime) = runtime_dependency(metadata) {
        out.push_str(&format!("- {} {}\n", runtime.name, runtime.version));
    }
    out.push_str("- An endpoint exposing the OpenAI v1 API surface\n");
    match metadata.auth_mode() {
        AuthMode::Key => {
            out.push_str("- An API key with access to the endpoint\n");
        }
        AuthMode::Entra => {
            out.push_str(
                "- A Microsoft Entra ID identity with access to the endpoint (sign in with `az login`)\n",
            );
        }
    }

    out.push_str("\n## Run\n\n```sh\n");
    for command in run_commands(language) {
        out.push_str(command);
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

/// Shell commands that install dependencies and run the sample.
pub fn run_commands(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["pip install -r requirements.txt", "python sample.py"],
        Language::JavaScript => &["npm install", "node sample.js"],
        Language::Go => &["go mod tidy", "go run sample.go"],
        Language::Java => &["mvn compile exec:java -Dexec.mainClass=Sample"],
        Language::CSharp => &["dotnet run"],
    }
}

// ── per-language builders ───────────────────────────────────────────────

fn requirements_txt(metadata: &SampleMetadata) -> String {
    let mut out = String::new();
    for dep in package_dependencies(metadata) {
        // version strings already carry their operator, e.g. ">=1.84.0"
        out.push_str(&format!("{}{}\n", dep.name, dep.version));
    }
    out
}

fn package_json(metadata: &SampleMetadata) -> String {
    let dependencies: serde_json::Map<String, serde_json::Value> = package_dependencies(metadata)
        .map(|dep| (dep.name.clone(), json!(dep.version)))
        .collect();
    let node = runtime_dependency(metadata).map_or(">=20", |dep| dep.version.as_str());
    let manifest = json!({
        "name": metadata.id,
        "version": "1.0.0",
        "description": metadata.description,
        "type": "module",
        "main": "sample.js",
        "scripts": { "start": "node sample.js" },
        "dependencies": dependencies,
        "engines": { "node": node },
    });
    let mut out =
        serde_json::to_string_pretty(&manifest).expect("manifest value serializes to JSON");
    out.push('\n');
    out
}

fn go_mod(metadata: &SampleMetadata) -> String {
    let go = runtime_dependency(metadata).map_or("1.22", |dep| minimum_version(&dep.version));
    let mut out = format!("module example.com/{}\n\ngo {}\n", metadata.id, go);
    out.push_str("\nrequire (\n");
    for dep in package_dependencies(metadata) {
        out.push_str(&format!("\t{} {}\n", dep.name, dep.version));
    }
    out.push_str(")\n");
    out
}

fn pom_xml(metadata: &SampleMetadata) -> String {
    let java = runtime_dependency(metadata).map_or("17", |dep| minimum_version(&dep.version));
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n");
    out.push_str("         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
    out.push_str(
        "         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n",
    );
    out.push_str("  <modelVersion>4.0.0</modelVersion>\n");
    out.push_str("  <groupId>com.example</groupId>\n");
    out.push_str(&format!("  <artifactId>{}</artifactId>\n", metadata.id));
    out.push_str("  <version>1.0.0</version>\n");
    out.push_str("  <properties>\n");
    out.push_str(&format!("    <maven.compiler.source>{java}</maven.compiler.source>\n"));
    out.push_str(&format!("    <maven.compiler.target>{java}</maven.compiler.target>\n"));
    out.push_str("    <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>\n");
    out.push_str("  </properties>\n");
    out.push_str("  <dependencies>\n");
    for dep in package_dependencies(metadata) {
        // Maven coordinates are stored as "groupId:artifactId"
        let (group, artifact) = dep.name.split_once(':').unwrap_or(("com.example", &dep.name));
        out.push_str("    <dependency>\n");
        out.push_str(&format!("      <groupId>{group}</groupId>\n"));
        out.push_str(&format!("      <artifactId>{artifact}</artifactId>\n"));
        out.push_str(&format!("      <version>{}</version>\n", dep.version));
        out.push_str("    </dependency>\n");
    }
    out.push_str("  </dependencies>\n</project>\n");
    out
}

fn csproj(metadata: &SampleMetadata) -> String {
    let dotnet = runtime_dependency(metadata).map_or("8.0", |dep| minimum_version(&dep.version));
    let mut out = String::from("<Project Sdk=\"Microsoft.NET.Sdk\">\n\n  <PropertyGroup>\n");
    out.push_str("    <OutputType>Exe</OutputType>\n");
    out.push_str(&format!("    <TargetFramework>net{dotnet}</TargetFramework>\n"));
    out.push_str("    <ImplicitUsings>enable</ImplicitUsings>\n");
    out.push_str("    <Nullable>enable</Nullable>\n");
    out.push_str("  </PropertyGroup>\n\n  <ItemGroup>\n");
    for dep in package_dependencies(metadata) {
        out.push_str(&format!(
            "    <PackageReference Include=\"{}\" Version=\"{}\" />\n",
            dep.name, dep.version
        ));
    }
    out.push_str("  </ItemGroup>\n\n</Project>\n");
    out
}

// ── helpers ─────────────────────────────────────────────────────────────

fn package_dependencies(metadata: &SampleMetadata) -> impl Iterator<Item = &Dependency> {
    metadata
        .dependencies
        .iter()
        .filter(|dep| dep.kind == DependencyKind::Package)
}

fn runtime_dependency(metadata: &SampleMetadata) -> Option<&Dependency> {
    metadata
        .dependencies
        .iter()
        .find(|dep| dep.kind == DependencyKind::Runtime)
}

/// Strips the `>=` operator off a runtime constraint, leaving the bare
/// version for manifests that want one (`go 1.22`, `net8.0`).
fn minimum_version(version: &str) -> &str {
    version.trim_start_matches(">=").trim()
}
