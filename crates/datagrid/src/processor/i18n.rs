//! Processor for the `messageResolver` option.

use super::ProcessingContext;
use crate::error::ConfigError;

/// Binds a message resolver built by the host-registered provider named by
/// the option value. A missing provider or a failing constructor is
/// non-fatal: it is logged, recorded as a diagnostic, and the pass continues
/// with no resolver bound.
pub(super) fn message_resolver(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    let Some(name) = ctx.value().as_str().map(str::to_string) else {
        return Ok(());
    };

    let Some(provider) = ctx.table().providers().get(&name).cloned() else {
        tracing::warn!(
            resolver = %name,
            "no message-resolver provider registered under this name"
        );
        ctx.record_diagnostic(format!(
            "message resolver \"{name}\" is not provided by the host"
        ));
        return Ok(());
    };

    let table_id = ctx.table().table_id().to_string();
    match provider.create(&table_id) {
        Ok(resolver) => ctx.table_mut().set_message_resolver(Some(resolver)),
        Err(cause) => {
            tracing::warn!(
                resolver = %name,
                cause = %cause,
                "message resolver construction failed"
            );
            ctx.record_diagnostic(format!(
                "message resolver \"{name}\" failed to initialize: {cause}"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfiguration;
    use crate::i18n::{MessageResolver, MessageResolverProvider, ProviderRegistry};
    use crate::option::registry;

    struct Fixed;

    impl MessageResolver for Fixed {
        fn message(&self, _key: &str, _default: &str) -> String {
            "bonjour".to_string()
        }
    }

    struct FixedProvider;

    impl MessageResolverProvider for FixedProvider {
        fn create(&self, _table_id: &str) -> Result<Box<dyn MessageResolver>, String> {
            Ok(Box::new(Fixed))
        }
    }

    struct FailingProvider;

    impl MessageResolverProvider for FailingProvider {
        fn create(&self, _table_id: &str) -> Result<Box<dyn MessageResolver>, String> {
            Err("bundle file missing".to_string())
        }
    }

    fn run(table: &mut TableConfiguration, name: &str) {
        let value = registry::I18N_MESSAGE_RESOLVER.parse(name).unwrap();
        let mut ctx =
            ProcessingContext::new(&registry::I18N_MESSAGE_RESOLVER, value, table, None, false);
        message_resolver(&mut ctx).unwrap();
    }

    #[test]
    fn registered_provider_binds_resolver() {
        let mut providers = ProviderRegistry::new();
        providers.register("fixed", FixedProvider);
        let mut table = TableConfiguration::new("t1").with_providers(providers);

        run(&mut table, "fixed");
        let resolver = table.message_resolver().unwrap();
        assert_eq!(resolver.message("any", "x"), "bonjour");
        assert!(table.diagnostics().is_empty());
    }

    #[test]
    fn missing_provider_is_non_fatal() {
        let mut table = TableConfiguration::new("t1");
        run(&mut table, "nope");

        assert!(table.message_resolver().is_none());
        assert_eq!(table.diagnostics().len(), 1);
        assert!(table.diagnostics()[0].contains("nope"));
    }

    #[test]
    fn failing_construction_is_non_fatal() {
        let mut providers = ProviderRegistry::new();
        providers.register("broken", FailingProvider);
        let mut table = TableConfiguration::new("t1").with_providers(providers);

        run(&mut table, "broken");
        assert!(table.message_resolver().is_none());
        assert!(table.diagnostics()[0].contains("bundle file missing"));
    }
}
