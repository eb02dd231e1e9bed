//! Per-pass table and column configuration aggregates.
//!
//! One [`TableConfiguration`] (with its nested [`ColumnConfiguration`]s) is
//! created fresh for every table encountered during a render pass, populated
//! by the staging collectors and the pipeline, handed to the HTML builder,
//! and discarded. Nothing here survives a request.
//!
//! A configuration moves through four strictly forward phases:
//!
//! ```text
//! Staged → OptionsProcessed → ExtensionsApplied → Finalized
//! ```
//!
//! No option processor runs after `ExtensionsApplied` and no extension runs
//! before `OptionsProcessed`; the pipeline enforces both. `Finalized` is
//! terminal and read-only — mutating a finalized configuration is a
//! programming error and panics rather than returning an error.

use indexmap::IndexMap;

use crate::bundle::{Bundle, BundleGraph};
use crate::callback::{CallbackSet, CallbackType};
use crate::export::ExportConf;
use crate::extension::{Extension, ExtensionRegistry};
use crate::i18n::{MessageResolver, ProviderRegistry};
use crate::js::JsSnippet;
use crate::option::{ConfigOption, OptionScope, OptionValue};
use crate::params::{MergeMode, ParameterSet};

/// The processing phase of a configuration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigPhase {
    /// Raw entries staged, nothing processed yet.
    Staged,
    /// All staged options parsed and processed into typed values.
    OptionsProcessed,
    /// All registered extensions have run their setup.
    ExtensionsApplied,
    /// Terminal, read-only.
    Finalized,
}

/// Configuration for a single column, owned by its table.
#[derive(Debug, Default)]
pub struct ColumnConfiguration {
    staged: IndexMap<&'static ConfigOption, String>,
    options: IndexMap<&'static ConfigOption, OptionValue>,
    staged_extensions: ExtensionRegistry,
}

impl ColumnConfiguration {
    /// Creates an empty column configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a raw value for a column-scope option.
    ///
    /// At most one entry exists per option: a later write overwrites the
    /// value while keeping the entry's original insertion position, so the
    /// processing order stays the first-staged order.
    pub fn stage(&mut self, option: &'static ConfigOption, raw: impl Into<String>) {
        debug_assert_eq!(option.scope(), OptionScope::Column);
        self.staged.insert(option, raw.into());
    }

    /// Stages an extension to be merged into the table's registry when this
    /// column is processed.
    pub fn stage_extension(&mut self, extension: Box<dyn Extension>) {
        self.staged_extensions.register(extension);
    }

    /// Looks up the typed value for an option, falling back to the option's
    /// documented default.
    pub fn option_value(&self, option: &'static ConfigOption) -> Option<OptionValue> {
        self.options
            .get(option)
            .cloned()
            .or_else(|| option.default_value())
    }

    /// Typed boolean lookup.
    pub fn bool_option(&self, option: &'static ConfigOption) -> Option<bool> {
        self.option_value(option).and_then(|v| v.as_bool())
    }

    /// Typed string lookup.
    pub fn str_option(&self, option: &'static ConfigOption) -> Option<String> {
        self.option_value(option)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// Returns true if the option was explicitly set (processed or still
    /// staged), ignoring defaults.
    pub fn is_option_set(&self, option: &'static ConfigOption) -> bool {
        self.options.contains_key(option) || self.staged.contains_key(option)
    }

    /// Writes a typed value directly, as processors do.
    pub fn set_option(&mut self, option: &'static ConfigOption, value: OptionValue) {
        debug_assert_eq!(option.scope(), OptionScope::Column);
        self.options.insert(option, value);
    }

    /// The processed option map in processing order.
    pub fn options(&self) -> &IndexMap<&'static ConfigOption, OptionValue> {
        &self.options
    }

    pub(crate) fn staged_mut(&mut self) -> &mut IndexMap<&'static ConfigOption, String> {
        &mut self.staged
    }

    pub(crate) fn take_staged_extensions(&mut self) -> ExtensionRegistry {
        std::mem::take(&mut self.staged_extensions)
    }
}

/// Configuration for one table, exclusively owned for one render pass.
#[derive(Debug)]
pub struct TableConfiguration {
    table_id: String,
    phase: ConfigPhase,
    staged: IndexMap<&'static ConfigOption, String>,
    options: IndexMap<&'static ConfigOption, OptionValue>,
    columns: Vec<ColumnConfiguration>,
    extensions: ExtensionRegistry,
    params: ParameterSet,
    callbacks: CallbackSet,
    bundles: BundleGraph,
    doc_ready: Vec<JsSnippet>,
    exports: IndexMap<String, ExportConf>,
    providers: ProviderRegistry,
    message_resolver: Option<Box<dyn MessageResolver>>,
    diagnostics: Vec<String>,
}

impl TableConfiguration {
    /// Creates a fresh configuration for the table with the given DOM id.
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            phase: ConfigPhase::Staged,
            staged: IndexMap::new(),
            options: IndexMap::new(),
            columns: Vec::new(),
            extensions: ExtensionRegistry::new(),
            params: ParameterSet::new(),
            callbacks: CallbackSet::new(),
            bundles: BundleGraph::new(),
            doc_ready: Vec::new(),
            exports: IndexMap::new(),
            providers: ProviderRegistry::new(),
            message_resolver: None,
            diagnostics: Vec::new(),
        }
    }

    /// Installs the host's message-resolver providers for this pass.
    pub fn with_providers(mut self, providers: ProviderRegistry) -> Self {
        self.providers = providers;
        self
    }

    /// The table's DOM id.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// The current processing phase.
    pub fn phase(&self) -> ConfigPhase {
        self.phase
    }

    pub(crate) fn advance_phase(&mut self, to: ConfigPhase) {
        assert!(
            to > self.phase,
            "configuration phase may only move forward (at {:?}, asked for {:?})",
            self.phase,
            to
        );
        self.phase = to;
    }

    fn assert_mutable(&self) {
        assert!(
            self.phase != ConfigPhase::Finalized,
            "table \"{}\": configuration is finalized and read-only",
            self.table_id
        );
    }

    /// Stages a raw value for a table-scope option.
    ///
    /// At most one entry exists per option: a later write overwrites the
    /// value while keeping the entry's original insertion position. The
    /// pipeline processes entries in exactly this staging order, which is a
    /// documented contract — processors may rely on earlier entries having
    /// been processed.
    pub fn stage(&mut self, option: &'static ConfigOption, raw: impl Into<String>) {
        self.assert_mutable();
        debug_assert_eq!(option.scope(), OptionScope::Table);
        self.staged.insert(option, raw.into());
    }

    /// Looks up the typed value for an option, falling back to the option's
    /// documented default.
    pub fn option_value(&self, option: &'static ConfigOption) -> Option<OptionValue> {
        self.options
            .get(option)
            .cloned()
            .or_else(|| option.default_value())
    }

    /// Typed boolean lookup.
    pub fn bool_option(&self, option: &'static ConfigOption) -> Option<bool> {
        self.option_value(option).and_then(|v| v.as_bool())
    }

    /// Typed string lookup.
    pub fn str_option(&self, option: &'static ConfigOption) -> Option<String> {
        self.option_value(option)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    /// Typed integer lookup.
    pub fn uint_option(&self, option: &'static ConfigOption) -> Option<u64> {
        self.option_value(option).and_then(|v| v.as_uint())
    }

    /// Returns true if the option was explicitly set (processed or still
    /// staged), ignoring defaults.
    ///
    /// Processors use this to decide whether to write auxiliary defaults; a
    /// value staged later in the same pass counts as set.
    pub fn is_option_set(&self, option: &'static ConfigOption) -> bool {
        self.options.contains_key(option) || self.staged.contains_key(option)
    }

    /// Writes a typed value directly, bypassing parsing, as processors do
    /// for auxiliary entries.
    pub fn set_option(&mut self, option: &'static ConfigOption, value: OptionValue) {
        self.assert_mutable();
        debug_assert_eq!(option.scope(), OptionScope::Table);
        self.options.insert(option, value);
    }

    /// The processed option map in processing order.
    pub fn options(&self) -> &IndexMap<&'static ConfigOption, OptionValue> {
        &self.options
    }

    /// Adds a column configuration, returning a handle for staging.
    pub fn add_column(&mut self, column: ColumnConfiguration) {
        self.assert_mutable();
        self.columns.push(column);
    }

    /// The table's columns, in declaration order.
    pub fn columns(&self) -> &[ColumnConfiguration] {
        &self.columns
    }

    /// Registers an extension; duplicates (by name) collapse to the first
    /// registration.
    pub fn register_extension(&mut self, extension: Box<dyn Extension>) {
        self.assert_mutable();
        assert!(
            self.phase < ConfigPhase::ExtensionsApplied,
            "table \"{}\": extensions cannot be registered after setup has run",
            self.table_id
        );
        self.extensions.register(extension);
    }

    /// Returns true if an extension with the given name is registered.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Names of registered extensions, in registration order.
    pub fn extension_names(&self) -> Vec<&'static str> {
        self.extensions.names()
    }

    /// Adds a widget-initialization parameter under the given merge mode.
    pub fn add_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
        mode: MergeMode,
    ) {
        self.assert_mutable();
        self.params.add(key, value, mode);
    }

    /// The accumulated parameter set.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Registers callback code for a lifecycle event (create-or-append).
    pub fn register_callback(&mut self, ty: CallbackType, code: &str) {
        self.assert_mutable();
        self.callbacks.register(ty, code);
    }

    /// The accumulated callbacks.
    pub fn callbacks(&self) -> &CallbackSet {
        &self.callbacks
    }

    /// Requests an asset bundle; duplicates are no-ops.
    pub fn add_bundle(&mut self, bundle: Bundle) {
        self.assert_mutable();
        self.bundles.add(bundle);
    }

    /// The accumulated bundle graph.
    pub fn bundles(&self) -> &BundleGraph {
        &self.bundles
    }

    /// Appends a snippet to the document-ready block emitted with the table.
    pub fn append_doc_ready(&mut self, snippet: JsSnippet) {
        self.assert_mutable();
        self.doc_ready.push(snippet);
    }

    /// Document-ready snippets, in contribution order.
    pub fn doc_ready(&self) -> &[JsSnippet] {
        &self.doc_ready
    }

    /// Stores an export configuration keyed by its format, replacing any
    /// previous configuration for that format. Independent of the option
    /// pipeline.
    pub fn set_export_conf(&mut self, conf: ExportConf) {
        self.assert_mutable();
        self.exports.insert(conf.format.clone(), conf);
    }

    /// Looks up the export configuration for a format.
    pub fn export_conf(&self, format: &str) -> Option<&ExportConf> {
        self.exports.get(format)
    }

    /// All export configurations, in registration order.
    pub fn export_confs(&self) -> impl Iterator<Item = &ExportConf> {
        self.exports.values()
    }

    /// The host's message-resolver providers.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// The bound message resolver, if the pass produced one.
    pub fn message_resolver(&self) -> Option<&dyn MessageResolver> {
        self.message_resolver.as_deref()
    }

    pub(crate) fn set_message_resolver(&mut self, resolver: Option<Box<dyn MessageResolver>>) {
        self.message_resolver = resolver;
    }

    /// Records a non-fatal diagnostic for later inspection.
    pub fn record_diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }

    /// Non-fatal diagnostics recorded during the pass.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub(crate) fn staged_mut(&mut self) -> &mut IndexMap<&'static ConfigOption, String> {
        &mut self.staged
    }

    pub(crate) fn staged_raw(&self, option: &'static ConfigOption) -> Option<&str> {
        self.staged.get(option).map(String::as_str)
    }

    pub(crate) fn take_columns(&mut self) -> Vec<ColumnConfiguration> {
        std::mem::take(&mut self.columns)
    }

    pub(crate) fn restore_columns(&mut self, columns: Vec<ColumnConfiguration>) {
        self.columns = columns;
    }

    pub(crate) fn take_extensions(&mut self) -> Vec<Box<dyn Extension>> {
        self.extensions.take_all()
    }

    pub(crate) fn restore_extensions(&mut self, extensions: Vec<Box<dyn Extension>>) {
        for extension in extensions {
            self.extensions.register(extension);
        }
    }

    pub(crate) fn merge_extensions(&mut self, staged: ExtensionRegistry) {
        self.extensions.merge(staged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::registry;

    #[test]
    fn staging_overwrites_in_place() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::FEATURE_DOM, "lfrtip");
        table.stage(&registry::AJAX_PIPESIZE, "3");
        table.stage(&registry::FEATURE_DOM, "frti");

        let keys: Vec<&str> = table.staged.keys().map(|o| o.key()).collect();
        assert_eq!(keys, vec!["dom", "pipeSize"]);
        assert_eq!(table.staged.get(&&registry::FEATURE_DOM).unwrap(), "frti");
    }

    #[test]
    fn option_value_falls_back_to_default() {
        let table = TableConfiguration::new("t1");
        assert_eq!(
            table.uint_option(&registry::AJAX_PIPESIZE),
            Some(registry::DEFAULT_PIPE_SIZE)
        );
        // is_option_set ignores defaults.
        assert!(!table.is_option_set(&registry::AJAX_PIPESIZE));
    }

    #[test]
    fn is_option_set_sees_staged_entries() {
        let mut table = TableConfiguration::new("t1");
        assert!(!table.is_option_set(&registry::AJAX_PIPESIZE));
        table.stage(&registry::AJAX_PIPESIZE, "3");
        assert!(table.is_option_set(&registry::AJAX_PIPESIZE));
    }

    #[test]
    fn phase_moves_forward_only() {
        let mut table = TableConfiguration::new("t1");
        table.advance_phase(ConfigPhase::OptionsProcessed);
        table.advance_phase(ConfigPhase::ExtensionsApplied);
        assert_eq!(table.phase(), ConfigPhase::ExtensionsApplied);
    }

    #[test]
    #[should_panic(expected = "forward")]
    fn phase_cannot_move_backward() {
        let mut table = TableConfiguration::new("t1");
        table.advance_phase(ConfigPhase::ExtensionsApplied);
        table.advance_phase(ConfigPhase::OptionsProcessed);
    }

    #[test]
    #[should_panic(expected = "finalized")]
    fn finalized_configuration_rejects_mutation() {
        let mut table = TableConfiguration::new("t1");
        table.advance_phase(ConfigPhase::Finalized);
        table.stage(&registry::FEATURE_DOM, "t");
    }

    #[test]
    fn export_confs_pass_through() {
        let mut table = TableConfiguration::new("t1");
        table.set_export_conf(crate::export::ExportConf::new("csv"));
        table.set_export_conf(crate::export::ExportConf::new("pdf"));
        table.set_export_conf(crate::export::ExportConf::new("csv").file_name("data"));

        assert_eq!(table.export_confs().count(), 2);
        assert_eq!(table.export_conf("csv").unwrap().file_name, "data");
    }
}
