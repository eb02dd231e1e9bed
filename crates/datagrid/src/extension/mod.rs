//! Capability extensions and their setup machinery.
//!
//! An extension is a named capability unit (a feature, a plugin, or a theme)
//! that contributes parameters, callbacks, bundles, and document-ready code
//! to a table once option processing has finished. Identity is the extension
//! name: registering the same name twice collapses to a single setup run.
//!
//! Extensions read the *finalized typed options* through a [`TableView`] and
//! write through an [`ExtensionOutput`]; the setup runner merges the output
//! into the table aggregates afterwards. The split keeps exactly one writer
//! per pass and lets the merge policies of the parameter and callback
//! registries arbitrate between contributions — an extension can never
//! remove or silently clobber another extension's work outside those
//! policies.

pub mod feature;
pub mod plugin;
pub mod theme;

use std::fmt;

use crate::bundle::Bundle;
use crate::callback::CallbackType;
use crate::config::{ColumnConfiguration, TableConfiguration};
use crate::error::ConfigError;
use crate::js::JsSnippet;
use crate::option::{ConfigOption, OptionValue};
use crate::params::{MergeMode, Parameter};

/// A named capability unit with a single setup step.
pub trait Extension {
    /// The extension's unique name; also its identity for deduplication.
    fn name(&self) -> &'static str;

    /// Contributes configuration for the table.
    ///
    /// Runs exactly once per pass, after all options are processed. Reads
    /// typed options from `table`; writes through `out`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ExtensionSetup`] when a required option is absent or
    /// inconsistent. Setup errors are fatal for the pass.
    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError>;
}

/// Insertion-ordered, name-deduplicated collection of extensions.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension. A second registration under the same name is
    /// a no-op, preserving the first registration's position.
    pub fn register(&mut self, extension: Box<dyn Extension>) {
        if !self.contains(extension.name()) {
            self.extensions.push(extension);
        }
    }

    /// Returns true if an extension with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e.name() == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Drains the registry for the setup runner.
    pub(crate) fn take_all(&mut self) -> Vec<Box<dyn Extension>> {
        std::mem::take(&mut self.extensions)
    }

    /// Merges another registry into this one, keeping first-seen order and
    /// name deduplication.
    pub(crate) fn merge(&mut self, other: ExtensionRegistry) {
        for extension in other.extensions {
            self.register(extension);
        }
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("extensions", &self.names())
            .finish()
    }
}

/// Read-only view of a table configuration handed to extension setup.
#[derive(Clone, Copy)]
pub struct TableView<'a> {
    config: &'a TableConfiguration,
}

impl<'a> TableView<'a> {
    pub(crate) fn new(config: &'a TableConfiguration) -> Self {
        Self { config }
    }

    /// The table's DOM id.
    pub fn table_id(&self) -> &str {
        self.config.table_id()
    }

    /// The JavaScript variable the widget instance is bound to.
    pub fn js_var(&self) -> String {
        format!("oTable_{}", self.config.table_id())
    }

    /// Typed option lookup (with defaults).
    pub fn option_value(&self, option: &'static ConfigOption) -> Option<OptionValue> {
        self.config.option_value(option)
    }

    /// Typed boolean lookup.
    pub fn bool_option(&self, option: &'static ConfigOption) -> Option<bool> {
        self.config.bool_option(option)
    }

    /// Typed string lookup.
    pub fn str_option(&self, option: &'static ConfigOption) -> Option<String> {
        self.config.str_option(option)
    }

    /// Typed integer lookup.
    pub fn uint_option(&self, option: &'static ConfigOption) -> Option<u64> {
        self.config.uint_option(option)
    }

    /// Returns true if the option was explicitly configured.
    pub fn is_option_set(&self, option: &'static ConfigOption) -> bool {
        self.config.is_option_set(option)
    }

    /// Column views in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnView<'a>> {
        self.config
            .columns()
            .iter()
            .enumerate()
            .map(|(index, config)| ColumnView { index, config })
    }
}

/// Read-only view of one column during extension setup.
#[derive(Clone, Copy)]
pub struct ColumnView<'a> {
    index: usize,
    config: &'a ColumnConfiguration,
}

impl<'a> ColumnView<'a> {
    /// Zero-based column index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Typed option lookup (with defaults).
    pub fn option_value(&self, option: &'static ConfigOption) -> Option<OptionValue> {
        self.config.option_value(option)
    }

    /// Typed boolean lookup.
    pub fn bool_option(&self, option: &'static ConfigOption) -> Option<bool> {
        self.config.bool_option(option)
    }

    /// Typed string lookup.
    pub fn str_option(&self, option: &'static ConfigOption) -> Option<String> {
        self.config.str_option(option)
    }

    /// Returns true if the option was explicitly configured.
    pub fn is_option_set(&self, option: &'static ConfigOption) -> bool {
        self.config.is_option_set(option)
    }
}

/// Contributions accumulated during one extension's setup.
///
/// The setup runner merges outputs into the table configuration in setup
/// order, so repeated writes to the same parameter key combine under the
/// parameter merge policy and callback code accumulates in order.
#[derive(Default)]
pub struct ExtensionOutput {
    params: Vec<Parameter>,
    callbacks: Vec<(CallbackType, String)>,
    bundles: Vec<Bundle>,
    doc_ready: Vec<JsSnippet>,
}

impl ExtensionOutput {
    /// Adds a replacing parameter write.
    pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.params.push(Parameter::set(key, value));
    }

    /// Adds a parameter write under an explicit merge mode.
    pub fn add_parameter_with_mode(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
        mode: MergeMode,
    ) {
        self.params.push(Parameter::new(key, value, mode));
    }

    /// Registers callback code for a lifecycle event.
    pub fn add_callback(&mut self, ty: CallbackType, code: impl Into<String>) {
        self.callbacks.push((ty, code.into()));
    }

    /// Requests an asset bundle.
    pub fn add_bundle(&mut self, bundle: Bundle) {
        self.bundles.push(bundle);
    }

    /// Appends code to the table's document-ready block.
    pub fn append_doc_ready(&mut self, code: impl Into<String>) {
        self.doc_ready.push(JsSnippet::new(code));
    }

    pub(crate) fn merge_into(self, table: &mut TableConfiguration) {
        for param in self.params {
            table.add_parameter(param.key, param.value, param.mode);
        }
        for (ty, code) in self.callbacks {
            table.register_callback(ty, &code);
        }
        for bundle in self.bundles {
            table.add_bundle(bundle);
        }
        for snippet in self.doc_ready {
            table.append_doc_ready(snippet);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Extension for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn setup(&self, _: &TableView<'_>, _: &mut ExtensionOutput) -> Result<(), ConfigError> {
            Ok(())
        }
    }

    #[test]
    fn registry_dedups_by_name() {
        let mut registry = ExtensionRegistry::new();
        registry.register(Box::new(Named("a")));
        registry.register(Box::new(Named("b")));
        registry.register(Box::new(Named("a")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
    }

    #[test]
    fn merge_keeps_first_seen_order() {
        let mut first = ExtensionRegistry::new();
        first.register(Box::new(Named("a")));

        let mut second = ExtensionRegistry::new();
        second.register(Box::new(Named("b")));
        second.register(Box::new(Named("a")));

        first.merge(second);
        assert_eq!(first.names(), vec!["a", "b"]);
    }
}
