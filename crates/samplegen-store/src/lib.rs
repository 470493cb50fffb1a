//! samplegen Template Store
//!
//! A template store for code samples demonstrating the OpenAI v1 API
//! surface. Templates carry `<%= name %>` placeholder markers that are
//! replaced with literal values at generation time; the built-in set covers
//! every language/capability/auth-mode combination, and additional
//! `sample.*` files can be loaded from directories.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use samplegen_store::{SampleTemplate, TemplateStore};
//!
//! let mut store = TemplateStore::new();
//! store.add_template(SampleTemplate::new("t", "model=\"<%= deploymentName %>\"")).unwrap();
//!
//! let values = HashMap::from([("deploymentName".to_string(), "gpt-4".to_string())]);
//! let rendered = store.render("t", &values).unwrap();
//! assert_eq!(rendered, "model=\"gpt-4\"");
//! ```

pub mod builtin;
mod error;
pub mod loader;
mod store;
mod template;

pub use error::TemplateError;
pub use store::TemplateStore;
pub use template::SampleTemplate;
