//! Sample identity types: language, capability, auth mode, and the combined
//! sample key.
//!
//! A sample is identified by the `(language, capability, auth-mode)` triple.
//! The canonical text form is the `/`-separated path used both for template
//! names in the store and for directory layout on disk (e.g.,
//! `python/chat-completion/key-auth`). All parsing is case-insensitive.

use std::str::FromStr;

/// Programming language a sample is written in.
///
/// Determines the source file extension, the generated file names, and the
/// project file emitted next to the sample.
///
/// # Examples
///
/// ```
/// use samplegen_core::Language;
///
/// let lang: Language = "python".parse().unwrap();
/// assert_eq!(lang, Language::Python);
/// assert_eq!(lang.to_string(), "python");
/// assert_eq!(lang.extension(), "py");
///
/// // Case-insensitive, with common aliases
/// let js: Language = "JS".parse().unwrap();
/// assert_eq!(js, Language::JavaScript);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Go,
    Java,
    CSharp,
}

impl Language {
    /// All supported languages, in canonical order.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::JavaScript,
        Language::Go,
        Language::Java,
        Language::CSharp,
    ];

    /// Source file extension without the dot (`py`, `js`, `go`, `java`, `cs`).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::JavaScript => "js",
            Self::Go => "go",
            Self::Java => "java",
            Self::CSharp => "cs",
        }
    }

    /// File name for the generated sample source.
    ///
    /// Java and C# capitalize the file to match the `Sample` class name;
    /// the other languages use the lowercase `sample.<ext>` convention.
    pub fn source_file_name(self) -> &'static str {
        match self {
            Self::Python => "sample.py",
            Self::JavaScript => "sample.js",
            Self::Go => "sample.go",
            Self::Java => "Sample.java",
            Self::CSharp => "Sample.cs",
        }
    }

    /// File name for the language's project/dependency manifest.
    pub fn project_file_name(self) -> &'static str {
        match self {
            Self::Python => "requirements.txt",
            Self::JavaScript => "package.json",
            Self::Go => "go.mod",
            Self::Java => "pom.xml",
            Self::CSharp => "Sample.csproj",
        }
    }

    /// Human-readable name for display output (`"C#"`, not `"csharp"`).
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::CSharp => "C#",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::JavaScript => write!(f, "javascript"),
            Self::Go => write!(f, "go"),
            Self::Java => write!(f, "java"),
            Self::CSharp => write!(f, "csharp"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "go" | "golang" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            "csharp" | "cs" | "c#" => Ok(Self::CSharp),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

impl serde::Serialize for Language {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<Language>().map_err(serde::de::Error::custom)
    }
}

/// API capability a sample demonstrates.
///
/// # Examples
///
/// ```
/// use samplegen_core::Capability;
///
/// let cap: Capability = "chat-completion".parse().unwrap();
/// assert_eq!(cap, Capability::ChatCompletion);
/// assert_eq!(cap.to_string(), "chat-completion");
///
/// // Short aliases are accepted
/// let img: Capability = "image".parse().unwrap();
/// assert_eq!(img, Capability::ImageGeneration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ChatCompletion,
    ImageGeneration,
    Embeddings,
}

impl Capability {
    /// All supported capabilities, in canonical order.
    pub const ALL: [Capability; 3] = [
        Capability::ChatCompletion,
        Capability::ImageGeneration,
        Capability::Embeddings,
    ];

    /// Human-readable name for display output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ChatCompletion => "Chat completion",
            Self::ImageGeneration => "Image generation",
            Self::Embeddings => "Embeddings",
        }
    }

    /// Short tag used in catalog metadata.
    pub fn tag(self) -> &'static str {
        match self {
            Self::ChatCompletion => "chat",
            Self::ImageGeneration => "images",
            Self::Embeddings => "embeddings",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChatCompletion => write!(f, "chat-completion"),
            Self::ImageGeneration => write!(f, "image-generation"),
            Self::Embeddings => write!(f, "embeddings"),
        }
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat-completion" | "chat" | "completions" => Ok(Self::ChatCompletion),
            "image-generation" | "image" | "images" => Ok(Self::ImageGeneration),
            "embeddings" | "embedding" => Ok(Self::Embeddings),
            other => Err(format!("unknown capability: {other}")),
        }
    }
}

impl serde::Serialize for Capability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Capability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<Capability>().map_err(serde::de::Error::custom)
    }
}

/// Authentication mode a sample demonstrates.
///
/// `Key` samples pass a static API key; `Entra` samples acquire bearer
/// tokens through the platform identity library. The canonical text form
/// matches the directory convention (`key-auth`, `entra-auth`).
///
/// # Examples
///
/// ```
/// use samplegen_core::AuthMode;
///
/// let auth: AuthMode = "key".parse().unwrap();
/// assert_eq!(auth, AuthMode::Key);
/// assert_eq!(auth.to_string(), "key-auth");
///
/// let entra: AuthMode = "entra-auth".parse().unwrap();
/// assert_eq!(entra, AuthMode::Entra);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    Key,
    Entra,
}

impl AuthMode {
    /// All supported auth modes, in canonical order.
    pub const ALL: [AuthMode; 2] = [AuthMode::Key, AuthMode::Entra];

    /// Human-readable name for display output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Key => "API key",
            Self::Entra => "Microsoft Entra ID",
        }
    }

    /// Short tag used in catalog metadata.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Entra => "entra",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key => write!(f, "key-auth"),
            Self::Entra => write!(f, "entra-auth"),
        }
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key" | "key-auth" | "keyauth" | "apikey" => Ok(Self::Key),
            "entra" | "entra-auth" | "entraid" | "identity" => Ok(Self::Entra),
            other => Err(format!("unknown auth mode: {other}")),
        }
    }
}

impl serde::Serialize for AuthMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for AuthMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<AuthMode>().map_err(serde::de::Error::custom)
    }
}

/// The `(language, capability, auth-mode)` triple identifying one sample.
///
/// The canonical text form is the `/`-separated path triple used for
/// template names and output directories. `Display` and `FromStr`
/// round-trip.
///
/// # Examples
///
/// ```
/// use samplegen_core::{AuthMode, Capability, Language, SampleKey};
///
/// let key: SampleKey = "python/chat-completion/key-auth".parse().unwrap();
/// assert_eq!(key.language, Language::Python);
/// assert_eq!(key.capability, Capability::ChatCompletion);
/// assert_eq!(key.auth_mode, AuthMode::Key);
/// assert_eq!(key.to_string(), "python/chat-completion/key-auth");
/// assert_eq!(key.id(), "python-chat-completion-key-auth");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleKey {
    pub language: Language,
    pub capability: Capability,
    pub auth_mode: AuthMode,
}

impl SampleKey {
    /// Creates a sample key from its three components.
    pub fn new(language: Language, capability: Capability, auth_mode: AuthMode) -> Self {
        Self {
            language,
            capability,
            auth_mode,
        }
    }

    /// Stable catalog identifier (`-`-joined form of the path triple).
    ///
    /// Ids are not parseable back into components (capability names contain
    /// `-` themselves); use the catalog to resolve an id.
    pub fn id(&self) -> String {
        format!("{}-{}-{}", self.language, self.capability, self.auth_mode)
    }
}

impl std::fmt::Display for SampleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.language, self.capability, self.auth_mode)
    }
}

impl FromStr for SampleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [language, capability, auth_mode] = parts.as_slice() else {
            return Err(format!(
                "invalid sample key '{s}': expected <language>/<capability>/<auth-mode>"
            ));
        };
        Ok(Self {
            language: language.parse()?,
            capability: capability.parse()?,
            auth_mode: auth_mode.parse()?,
        })
    }
}

impl serde::Serialize for SampleKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SampleKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<SampleKey>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Language ────────────────────────────────────────────────────────

    #[test]
    fn test_should_round_trip_language_display_and_parse() {
        for language in Language::ALL {
            let parsed: Language = language.to_string().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn test_should_parse_language_aliases_case_insensitively() {
        assert_eq!("PY".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("js".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("Golang".parse::<Language>().unwrap(), Language::Go);
        assert_eq!("C#".parse::<Language>().unwrap(), Language::CSharp);
    }

    #[test]
    fn test_should_reject_unknown_language() {
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn test_should_map_language_to_file_names() {
        assert_eq!(Language::Python.source_file_name(), "sample.py");
        assert_eq!(Language::Java.source_file_name(), "Sample.java");
        assert_eq!(Language::CSharp.source_file_name(), "Sample.cs");
        assert_eq!(Language::Python.project_file_name(), "requirements.txt");
        assert_eq!(Language::JavaScript.project_file_name(), "package.json");
        assert_eq!(Language::Go.project_file_name(), "go.mod");
        assert_eq!(Language::Java.project_file_name(), "pom.xml");
        assert_eq!(Language::CSharp.project_file_name(), "Sample.csproj");
    }

    // ── Capability ──────────────────────────────────────────────────────

    #[test]
    fn test_should_round_trip_capability_display_and_parse() {
        for capability in Capability::ALL {
            let parsed: Capability = capability.to_string().parse().unwrap();
            assert_eq!(parsed, capability);
        }
    }

    #[test]
    fn test_should_parse_capability_aliases() {
        assert_eq!(
            "chat".parse::<Capability>().unwrap(),
            Capability::ChatCompletion
        );
        assert_eq!(
            "images".parse::<Capability>().unwrap(),
            Capability::ImageGeneration
        );
        assert_eq!(
            "embedding".parse::<Capability>().unwrap(),
            Capability::Embeddings
        );
    }

    // ── AuthMode ────────────────────────────────────────────────────────

    #[test]
    fn test_should_round_trip_auth_mode_display_and_parse() {
        for auth_mode in AuthMode::ALL {
            let parsed: AuthMode = auth_mode.to_string().parse().unwrap();
            assert_eq!(parsed, auth_mode);
        }
    }

    #[test]
    fn test_should_parse_auth_mode_aliases() {
        assert_eq!("key".parse::<AuthMode>().unwrap(), AuthMode::Key);
        assert_eq!("EntraID".parse::<AuthMode>().unwrap(), AuthMode::Entra);
        assert_eq!("identity".parse::<AuthMode>().unwrap(), AuthMode::Entra);
    }

    // ── SampleKey ───────────────────────────────────────────────────────

    #[test]
    fn test_should_parse_sample_key_from_path_triple() {
        let key: SampleKey = "go/embeddings/entra-auth".parse().unwrap();
        assert_eq!(key.language, Language::Go);
        assert_eq!(key.capability, Capability::Embeddings);
        assert_eq!(key.auth_mode, AuthMode::Entra);
    }

    #[test]
    fn test_should_reject_sample_key_with_wrong_segment_count() {
        assert!("python/chat-completion".parse::<SampleKey>().is_err());
        assert!(
            "python/chat-completion/key-auth/extra"
                .parse::<SampleKey>()
                .is_err()
        );
        assert!("".parse::<SampleKey>().is_err());
    }

    #[test]
    fn test_should_serialize_sample_key_as_path_string() {
        let key = SampleKey::new(Language::CSharp, Capability::ImageGeneration, AuthMode::Key);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"csharp/image-generation/key-auth\"");

        let back: SampleKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_should_build_stable_id_from_key() {
        let key = SampleKey::new(Language::Python, Capability::ChatCompletion, AuthMode::Key);
        assert_eq!(key.id(), "python-chat-completion-key-auth");
    }
}
