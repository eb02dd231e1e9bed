//! Pluggable message resolution.
//!
//! Tables can localize their fixed labels (pagination text, search box,
//! info summary) through a host-supplied [`MessageResolver`]. The pipeline
//! never constructs resolvers by name reflection; instead the host registers
//! [`MessageResolverProvider`]s in a [`ProviderRegistry`] before the pass
//! begins, and the `messageResolver` option selects one by name.
//!
//! Resolver construction is deliberately non-fatal: a missing provider or a
//! failing constructor is logged and recorded as a diagnostic, and the pass
//! continues with no resolver bound.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Resolves a message key to localized text.
pub trait MessageResolver {
    /// Looks up `key`, returning `default` when the key is unknown.
    fn message(&self, key: &str, default: &str) -> String;
}

impl fmt::Debug for dyn MessageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<message resolver>")
    }
}

/// Constructs a [`MessageResolver`] for one render pass.
///
/// Providers receive the table id so resolvers can scope lookups per table
/// if they need to. Construction may fail (a missing resource file, an
/// unreachable backend); the pipeline treats failure as non-fatal.
pub trait MessageResolverProvider {
    /// Builds a resolver for the table identified by `table_id`.
    fn create(&self, table_id: &str) -> Result<Box<dyn MessageResolver>, String>;
}

/// Host-side registry of named resolver providers.
///
/// Cheap to clone; providers are shared through `Rc` since a render pass is
/// single-threaded.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Rc<dyn MessageResolverProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty provider registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under the given name, replacing any previous
    /// provider with that name.
    pub fn register<P: MessageResolverProvider + 'static>(
        &mut self,
        name: impl Into<String>,
        provider: P,
    ) {
        self.providers.insert(name.into(), Rc::new(provider));
    }

    /// Looks up a provider by name.
    pub fn get(&self, name: &str) -> Option<&Rc<dyn MessageResolverProvider>> {
        self.providers.get(name)
    }

    /// Returns true if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
