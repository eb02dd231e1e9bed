//! # Datagrid - Table Configuration Pipeline
//!
//! Datagrid turns flat, string-valued table configuration into the typed
//! initialization a data-table widget consumes. It provides:
//!
//! - A static catalog of table and column options with typed parsing
//! - A processing pipeline running each option's processor in staging order
//! - Named capability extensions (features, plugins, themes) contributing
//!   parameters, callbacks, and asset bundles through a single setup step
//! - Merge policies that let independent extensions compose: parameters
//!   combine under set/append/prepend, callback code accumulates per
//!   lifecycle event, bundles deduplicate in first-request order
//! - Pluggable, host-provided message resolution for localized labels
//!
//! ## Core Concepts
//!
//! - [`TableConfiguration`]: the per-pass aggregate, staged then processed
//! - [`option::registry`]: the option catalog; keys resolve to `&'static`
//!   descriptors
//! - [`Extension`]: a named capability unit with one setup run per pass
//! - [`pipeline::run`]: the full pass — options, extensions, finalization
//!
//! ## Quick Start
//!
//! ```rust
//! use datagrid::option::registry;
//! use datagrid::{pipeline, TableConfiguration};
//!
//! let mut table = TableConfiguration::new("users");
//! table.stage(&registry::AJAX_SOURCE, "/users.json");
//! table.stage(&registry::AJAX_PIPELINING, "true");
//!
//! pipeline::run(&mut table)?;
//!
//! assert!(table.has_extension("pipelining"));
//! assert_eq!(table.bundles().names(), vec!["datagrid-ajax-pipelining"]);
//! # Ok::<(), datagrid::ConfigError>(())
//! ```
//!
//! A configuration moves through four strictly forward phases; after
//! [`pipeline::run`] it is finalized and read-only. Data problems (unknown
//! keys, bad values, failed extension setups) surface as [`ConfigError`];
//! phase misuse is a programming error and panics.

pub mod bundle;
pub mod callback;
pub mod config;
pub mod error;
pub mod export;
pub mod extension;
pub mod i18n;
pub mod js;
pub mod option;
pub mod params;
pub mod pipeline;
pub mod processor;

pub use bundle::{Bundle, BundleGraph};
pub use callback::{Callback, CallbackSet, CallbackType};
pub use config::{ColumnConfiguration, ConfigPhase, TableConfiguration};
pub use error::ConfigError;
pub use export::ExportConf;
pub use extension::{Extension, ExtensionOutput, ExtensionRegistry, TableView};
pub use i18n::{MessageResolver, MessageResolverProvider, ProviderRegistry};
pub use js::{JsFunction, JsSnippet};
pub use option::{ConfigOption, OptionScope, OptionValue, SortDirection};
pub use params::{MergeMode, Parameter, ParameterSet};
