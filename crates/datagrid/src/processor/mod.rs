//! Option processors.
//!
//! Every option names one processor out of a closed set, identified by
//! [`ProcessorId`] and dispatched through a plain function lookup rather
//! than virtual dispatch. A processor receives a
//! [`ProcessingContext`] and may:
//!
//! - overwrite the entry's typed value,
//! - register extensions on the owning table,
//! - register asset bundles (when its id is flagged bundle-graph-updatable),
//! - write auxiliary typed entries into the owning configuration.
//!
//! Processors run in staging order, which is a documented contract: a
//! processor may depend on an earlier staged option having been processed
//! (and may consult still-staged raw entries for options that come later).

mod ajax;
mod column;
mod css;
mod i18n;
mod plugin;

use crate::bundle::Bundle;
use crate::config::{ColumnConfiguration, TableConfiguration};
use crate::error::ConfigError;
use crate::extension::Extension;
use crate::option::{ConfigOption, OptionValue};

/// Names one processor out of the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorId {
    /// Keep the parsed value as-is.
    PassThrough,
    /// AJAX source: enables client-side AJAX loading unless server-side
    /// processing is configured.
    AjaxSource,
    /// Enables server-side processing.
    ServerSide,
    /// Enables AJAX pipelining and defaults the pipe size.
    Pipelining,
    /// Binds the reload control.
    ReloadSelector,
    /// Parses the `bundles#function` reload reference.
    ReloadFunction,
    /// Selects a theme extension.
    Theme,
    /// Applies a paging style.
    PagingType,
    /// Enables the scroller plugin.
    PluginScroller,
    /// Enables the column-reorder plugin.
    PluginColReorder,
    /// Enables the fixed-header plugin.
    PluginFixedHeader,
    /// Enables the responsive plugin.
    PluginResponsive,
    /// Binds a message resolver from the host's provider registry.
    MessageResolver,
    /// Registers the sorting feature for a column sort type.
    SortType,
    /// Registers the filtering feature for a filterable column.
    Filterable,
}

pub(crate) type ProcessorFn = fn(&mut ProcessingContext<'_>) -> Result<(), ConfigError>;

/// Resolves a processor id to its function.
pub(crate) fn dispatch(id: ProcessorId) -> ProcessorFn {
    match id {
        ProcessorId::PassThrough => pass_through,
        ProcessorId::AjaxSource => ajax::ajax_source,
        ProcessorId::ServerSide => ajax::server_side,
        ProcessorId::Pipelining => ajax::pipelining,
        ProcessorId::ReloadSelector => ajax::reload_selector,
        ProcessorId::ReloadFunction => ajax::reload_function,
        ProcessorId::Theme => css::theme,
        ProcessorId::PagingType => css::paging_type,
        ProcessorId::PluginScroller => plugin::scroller,
        ProcessorId::PluginColReorder => plugin::col_reorder,
        ProcessorId::PluginFixedHeader => plugin::fixed_header,
        ProcessorId::PluginResponsive => plugin::responsive,
        ProcessorId::MessageResolver => i18n::message_resolver,
        ProcessorId::SortType => column::sort_type,
        ProcessorId::Filterable => column::filterable,
    }
}

/// True for processors permitted to mutate the bundle graph mid-pass.
pub(crate) fn bundle_graph_updatable(id: ProcessorId) -> bool {
    matches!(id, ProcessorId::ReloadFunction)
}

fn pass_through(_ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    Ok(())
}

/// The context handed to a processor for one entry.
///
/// Exactly one context exists at a time per pass; it is the single writer
/// into the owning configuration while it lives.
pub struct ProcessingContext<'a> {
    option: &'static ConfigOption,
    value: OptionValue,
    table: &'a mut TableConfiguration,
    column: Option<&'a mut ColumnConfiguration>,
    bundle_graph_updatable: bool,
}

impl<'a> ProcessingContext<'a> {
    pub(crate) fn new(
        option: &'static ConfigOption,
        value: OptionValue,
        table: &'a mut TableConfiguration,
        column: Option<&'a mut ColumnConfiguration>,
        bundle_graph_updatable: bool,
    ) -> Self {
        Self {
            option,
            value,
            table,
            column,
            bundle_graph_updatable,
        }
    }

    /// The option being processed.
    pub fn option(&self) -> &'static ConfigOption {
        self.option
    }

    /// The entry's current typed value.
    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Overwrites the entry's typed value.
    pub fn set_value(&mut self, value: OptionValue) {
        self.value = value;
    }

    /// The owning table configuration, read-only.
    pub fn table(&self) -> &TableConfiguration {
        self.table
    }

    /// The owning column configuration, for column-scope entries.
    pub fn column(&self) -> Option<&ColumnConfiguration> {
        self.column.as_deref()
    }

    /// Registers an extension on the owning table (deduplicated by name).
    pub fn register_extension(&mut self, extension: Box<dyn Extension>) {
        self.table.register_extension(extension);
    }

    /// Requests an asset bundle mid-pass.
    ///
    /// Ignored (with a debug trace) when this processor is not flagged
    /// bundle-graph-updatable; bundles contributed by extensions go through
    /// setup instead.
    pub fn add_bundle(&mut self, bundle: Bundle) {
        if !self.bundle_graph_updatable {
            tracing::debug!(
                option = self.option.key(),
                bundle = %bundle.name(),
                "processor is not bundle-graph-updatable; bundle request ignored"
            );
            return;
        }
        self.table.add_bundle(bundle);
    }

    /// Writes an auxiliary typed entry on the table.
    pub fn set_table_option(&mut self, option: &'static ConfigOption, value: OptionValue) {
        self.table.set_option(option, value);
    }

    /// True if the table option was explicitly configured: processed
    /// already, or still staged later in the same pass.
    pub fn is_table_option_set(&self, option: &'static ConfigOption) -> bool {
        self.table.is_option_set(option)
    }

    /// Reads a boolean table option, falling back to a still-staged raw
    /// value when the entry has not been processed yet.
    pub fn staged_or_typed_bool(&self, option: &'static ConfigOption) -> Option<bool> {
        if let Some(value) = self.table.options().get(option) {
            return value.as_bool();
        }
        self.table
            .staged_raw(option)
            .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
    }

    /// Records a non-fatal diagnostic on the table.
    pub fn record_diagnostic(&mut self, message: impl Into<String>) {
        self.table.record_diagnostic(message);
    }

    pub(crate) fn table_mut(&mut self) -> &mut TableConfiguration {
        self.table
    }

    pub(crate) fn into_value(self) -> OptionValue {
        self.value
    }
}
