//! res-test: Test documents and conformance fixtures
//!
//! Provides a small builder for Kubernetes-shaped documents so tests don't
//! have to spell out YAML, and (feature = `"fixtures"`) a runner for the YAML
//! conformance fixtures under `fixtures/`.
//!
//! # Example
//!
//! ```
//! use res_test::prelude::*;
//!
//! let doc = ResourceDoc::new()
//!     .kind("Service")
//!     .name("web")
//!     .build();
//!
//! assert_eq!(get_kind(&doc), "Service");
//! assert_eq!(get_name(&doc), "web");
//! ```

use res::Document;
use serde_yaml::{Mapping, Value};

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Builder for a Kubernetes-shaped [`Document`].
///
/// Keys are emitted in manifest order: `apiVersion`, `kind`, `metadata`,
/// then any extra top-level keys in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResourceDoc {
    api_version: Option<String>,
    kind: Option<String>,
    name: Option<String>,
    namespace: Option<String>,
    extra: Vec<(String, Value)>,
}

impl ResourceDoc {
    /// Start an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `apiVersion`.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set `kind`.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set `metadata.name`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set `metadata.namespace`.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append an extra top-level key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Build the document.
    #[must_use]
    pub fn build(self) -> Document {
        let mut doc = Mapping::new();
        if let Some(api_version) = self.api_version {
            doc.insert("apiVersion".into(), api_version.into());
        }
        if let Some(kind) = self.kind {
            doc.insert(res::KIND_KEY.into(), kind.into());
        }

        let mut metadata = Mapping::new();
        if let Some(name) = self.name {
            metadata.insert(res::NAME_KEY.into(), name.into());
        }
        if let Some(namespace) = self.namespace {
            metadata.insert("namespace".into(), namespace.into());
        }
        if !metadata.is_empty() {
            doc.insert(res::METADATA_KEY.into(), metadata.into());
        }

        for (key, value) in self.extra {
            doc.insert(key.into(), value);
        }
        doc
    }
}

/// Shorthand for `ResourceDoc::new().kind(kind).name(name).build()`.
#[must_use]
pub fn resource(kind: &str, name: &str) -> Document {
    ResourceDoc::new().kind(kind).name(name).build()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{resource, ResourceDoc};
    pub use res::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use res::prelude::*;

    #[test]
    fn builds_in_manifest_order() {
        let doc = ResourceDoc::new()
            .with("spec", "x")
            .name("web")
            .kind("Pod")
            .api_version("v1")
            .build();

        let keys: Vec<_> = doc.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["apiVersion", "kind", "metadata", "spec"]);
    }

    #[test]
    fn empty_builder_has_no_fields() {
        let doc = ResourceDoc::new().build();
        assert!(doc.is_empty());
        assert_eq!(get_kind(&doc), "");
        assert_eq!(get_name(&doc), "");
    }

    #[test]
    fn namespace_does_not_leak_into_name() {
        let doc = ResourceDoc::new().namespace("prod").build();
        assert_eq!(get_name(&doc), "");
    }

    #[test]
    fn resource_shorthand() {
        let doc = resource("Service", "svc");
        let filter = ResourceFilter::new("/svc");
        assert!(filter.matches(&doc));
    }
}
