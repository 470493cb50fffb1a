//! Template store implementation.
//!
//! Manages a collection of code sample templates that can be embedded at
//! compile time, loaded from directories, registered manually, and rendered
//! with a substitution value map.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::builtin::builtin_templates;
use crate::loader::load_templates_from_dir;
use crate::{SampleTemplate, TemplateError};

/// Stores sample templates and performs placeholder substitution.
///
/// Placeholders use `<%= name %>` markers. Substitution is textual: every
/// occurrence of a marker is replaced by the value registered under its
/// name, with no escaping applied. Templates can be added individually via
/// [`add_template`](Self::add_template), loaded in bulk from a directory via
/// [`load_from_dir`](Self::load_from_dir), or preloaded with the built-in
/// set via [`with_builtin_templates`](Self::with_builtin_templates).
#[derive(Clone)]
pub struct TemplateStore {
    env: Environment<'static>,
    templates: HashMap<String, SampleTemplate>,
}

impl TemplateStore {
    /// Creates a new empty template store with no templates loaded.
    ///
    /// Use [`add_template`](Self::add_template) or
    /// [`load_from_dir`](Self::load_from_dir) to populate with templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters("<%", "%>")
                .variable_delimiters("<%=", "%>")
                .comment_delimiters("<%#", "%>")
                .build()
                .expect("placeholder delimiters are valid"),
        );
        // Missing values must fail loudly, and sample code is emitted verbatim.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        Self {
            env,
            templates: HashMap::new(),
        }
    }

    /// Creates a store preloaded with all built-in sample templates.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::InvalidTemplate` if a built-in template fails
    /// to parse, which indicates a malformed file under `templates/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samplegen_store::TemplateStore;
    ///
    /// let store = TemplateStore::with_builtin_templates().unwrap();
    /// assert!(store.get_template("python/chat-completion/key-auth").is_some());
    /// ```
    pub fn with_builtin_templates() -> Result<Self, TemplateError> {
        let mut store = Self::new();
        for template in builtin_templates() {
            store.add_template(template)?;
        }
        Ok(store)
    }

    /// Registers a single template with the store.
    ///
    /// An existing template with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::InvalidTemplate` if the template content has
    /// malformed placeholder markers (e.g., an unterminated `<%=`).
    pub fn add_template(&mut self, template: SampleTemplate) -> Result<(), TemplateError> {
        self.env
            .add_template_owned(template.name.clone(), template.content.clone())
            .map_err(|e: minijinja::Error| TemplateError::InvalidTemplate(e.to_string()))?;
        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    /// Loads all `sample.*` templates from a directory recursively.
    ///
    /// Template names are derived from relative directory paths (e.g.,
    /// `python/chat-completion/key-auth` from
    /// `python/chat-completion/key-auth/sample.py`). Existing templates with
    /// the same name are overwritten.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::IoError` if the directory cannot be read, or
    /// `TemplateError::InvalidTemplate` if a template has malformed markers.
    pub fn load_from_dir(&mut self, dir: &Path) -> Result<(), TemplateError> {
        let templates = load_templates_from_dir(dir)?;
        for template in templates {
            self.add_template(template)?;
        }
        Ok(())
    }

    /// Returns the placeholder names used by a named template, sorted.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::TemplateNotFound` if no template with the
    /// given name exists.
    pub fn placeholders(&self, name: &str) -> Result<BTreeSet<String>, TemplateError> {
        let tmpl = self
            .env
            .get_template(name)
            .map_err(|_| TemplateError::TemplateNotFound(name.to_string()))?;
        Ok(tmpl.undeclared_variables(false).into_iter().collect())
    }

    /// Renders a named template, replacing every placeholder marker with its
    /// value from the map.
    ///
    /// All placeholders are checked up front: if any placeholder has no value
    /// in the map, no output is produced at all.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::TemplateNotFound` if no template with the
    /// given name exists, or `TemplateError::MissingSubstitution` naming the
    /// first uncovered placeholder (in sorted order).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use samplegen_store::{SampleTemplate, TemplateStore};
    ///
    /// let mut store = TemplateStore::new();
    /// store.add_template(SampleTemplate::new("t", "model=\"<%= deploymentName %>\"")).unwrap();
    ///
    /// let values = HashMap::from([("deploymentName".to_string(), "gpt-4".to_string())]);
    /// assert_eq!(store.render("t", &values).unwrap(), "model=\"gpt-4\"");
    /// ```
    pub fn render(
        &self,
        name: &str,
        values: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let tmpl = self
            .env
            .get_template(name)
            .map_err(|_| TemplateError::TemplateNotFound(name.to_string()))?;

        let missing = tmpl
            .undeclared_variables(false)
            .into_iter()
            .filter(|p| !values.contains_key(p))
            .collect::<BTreeSet<String>>();
        if let Some(placeholder) = missing.into_iter().next() {
            return Err(TemplateError::MissingSubstitution {
                template: name.to_string(),
                placeholder,
            });
        }

        tmpl.render(values)
            .map_err(|e| TemplateError::InvalidTemplate(e.to_string()))
    }

    /// Returns a reference to the template with the given name, if it exists.
    pub fn get_template(&self, name: &str) -> Option<&SampleTemplate> {
        self.templates.get(name)
    }

    /// Returns the number of registered templates.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Returns all registered template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("template_count", &self.templates.len())
            .field("template_names", &self.template_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ── substitution ────────────────────────────────────────────────────

    #[test]
    fn test_should_substitute_all_occurrences_of_a_placeholder() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new(
                "t",
                "<%= name %> and <%= name %> again",
            ))
            .unwrap();

        let out = store.render("t", &values(&[("name", "gpt-4")])).unwrap();
        assert_eq!(out, "gpt-4 and gpt-4 again");
    }

    #[test]
    fn test_should_tolerate_whitespace_inside_markers() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "<%=name%> <%=  name  %>"))
            .unwrap();

        let out = store.render("t", &values(&[("name", "x")])).unwrap();
        assert_eq!(out, "x x");
    }

    #[test]
    fn test_should_not_escape_substituted_values() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "url = \"<%= u %>\""))
            .unwrap();

        let out = store
            .render("t", &values(&[("u", "https://a.example.com?x=1&y=<z>")]))
            .unwrap();
        assert_eq!(out, "url = \"https://a.example.com?x=1&y=<z>\"");
    }

    #[test]
    fn test_should_render_identically_on_repeated_calls() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new(
                "t",
                "endpoint=<%= endpoint %> model=<%= model %>",
            ))
            .unwrap();

        let vals = values(&[("endpoint", "api.example.com"), ("model", "gpt-4")]);
        let first = store.render("t", &vals).unwrap();
        let second = store.render("t", &vals).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_leave_no_markers_when_map_is_complete() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new(
                "t",
                "a=<%= a %>\nb=<%= b %>\nc=<%= c %>\n",
            ))
            .unwrap();

        let out = store
            .render("t", &values(&[("a", "1"), ("b", "2"), ("c", "3")]))
            .unwrap();
        assert!(!out.contains("<%="));
        assert!(!out.contains("%>"));
    }

    // ── failure paths ───────────────────────────────────────────────────

    #[test]
    fn test_should_fail_with_missing_substitution_for_uncovered_placeholder() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "key=<%= apiKey %>"))
            .unwrap();

        let err = store.render("t", &values(&[])).unwrap_err();
        match err {
            TemplateError::MissingSubstitution {
                template,
                placeholder,
            } => {
                assert_eq!(template, "t");
                assert_eq!(placeholder, "apiKey");
            }
            other => panic!("Expected MissingSubstitution, got: {other:?}"),
        }
    }

    #[test]
    fn test_should_report_first_missing_placeholder_in_sorted_order() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "<%= zeta %> <%= alpha %>"))
            .unwrap();

        let err = store.render("t", &values(&[])).unwrap_err();
        match err {
            TemplateError::MissingSubstitution { placeholder, .. } => {
                assert_eq!(placeholder, "alpha");
            }
            other => panic!("Expected MissingSubstitution, got: {other:?}"),
        }
    }

    #[test]
    fn test_should_fail_lookup_for_unknown_template() {
        let store = TemplateStore::new();
        let err = store.render("nope", &values(&[])).unwrap_err();
        assert!(matches!(err, TemplateError::TemplateNotFound(_)));
    }

    #[test]
    fn test_should_reject_template_with_unterminated_marker() {
        let mut store = TemplateStore::new();
        let err = store
            .add_template(SampleTemplate::new("bad", "model=<%= deploymentName"))
            .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidTemplate(_)));
    }

    #[test]
    fn test_should_ignore_extra_values_in_the_map() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "v=<%= v %>"))
            .unwrap();

        let out = store
            .render("t", &values(&[("v", "1"), ("unused", "2")]))
            .unwrap();
        assert_eq!(out, "v=1");
    }

    // ── introspection ───────────────────────────────────────────────────

    #[test]
    fn test_should_list_placeholders_sorted() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new(
                "t",
                "<%= deploymentName %> <%= apiKey %> <%= deploymentName %>",
            ))
            .unwrap();

        let names: Vec<String> = store.placeholders("t").unwrap().into_iter().collect();
        assert_eq!(names, vec!["apiKey", "deploymentName"]);
    }

    #[test]
    fn test_should_report_empty_placeholders_for_static_template() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "print('hello')"))
            .unwrap();

        assert!(store.placeholders("t").unwrap().is_empty());
        assert_eq!(store.render("t", &values(&[])).unwrap(), "print('hello')");
    }

    #[test]
    fn test_should_overwrite_template_with_same_name() {
        let mut store = TemplateStore::new();
        store
            .add_template(SampleTemplate::new("t", "old"))
            .unwrap();
        store
            .add_template(SampleTemplate::new("t", "new"))
            .unwrap();

        assert_eq!(store.template_count(), 1);
        assert_eq!(store.render("t", &values(&[])).unwrap(), "new");
    }
}
