//! Processors for the AJAX option group.

use super::ProcessingContext;
use crate::bundle::Bundle;
use crate::error::ConfigError;
use crate::extension::feature::{
    AjaxFeature, AjaxReloadFeature, PipeliningFeature, ServerSideFeature,
};
use crate::option::{registry, OptionValue};

/// `ajaxSource`: a non-blank source enables client-side AJAX loading,
/// unless server-side processing claims the wiring for itself.
pub(super) fn ajax_source(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    let has_source = ctx
        .value()
        .as_str()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false);
    if !has_source {
        return Ok(());
    }

    // serverSide may be staged after ajaxSource; either way the server-side
    // feature owns the request wiring then.
    if ctx
        .staged_or_typed_bool(&registry::AJAX_SERVERSIDE)
        .unwrap_or(false)
    {
        return Ok(());
    }

    ctx.register_extension(Box::new(AjaxFeature));
    Ok(())
}

/// `serverSide`: enables the server-side processing feature.
pub(super) fn server_side(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    if ctx.value().as_bool() == Some(true) {
        ctx.register_extension(Box::new(ServerSideFeature));
    }
    Ok(())
}

/// `pipelining`: enables the pipelining feature and defaults the pipe size
/// when the user did not configure one (a `pipeSize` staged later in the
/// same pass counts as configured).
pub(super) fn pipelining(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    if ctx.value().as_bool() != Some(true) {
        return Ok(());
    }

    ctx.register_extension(Box::new(PipeliningFeature));
    if !ctx.is_table_option_set(&registry::AJAX_PIPESIZE) {
        ctx.set_table_option(
            &registry::AJAX_PIPESIZE,
            OptionValue::UInt(registry::DEFAULT_PIPE_SIZE),
        );
    }
    Ok(())
}

/// `reloadSelector`: binds the reload control.
pub(super) fn reload_selector(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    ctx.register_extension(Box::new(AjaxReloadFeature));
    Ok(())
}

/// `reloadFunction`: either a bare function name, or the compound form
/// `bundle1,bundle2#function` pulling extra bundles in alongside the
/// function. A dangling `#` on either side is fatal.
pub(super) fn reload_function(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    let raw = ctx.value().as_str().unwrap_or("").trim().to_string();

    if raw.contains('#') {
        let parts: Vec<&str> = raw.split('#').collect();
        let malformed = parts.len() != 2
            || parts[0].trim().is_empty()
            || parts[1].trim().is_empty();
        if malformed {
            return Err(ConfigError::MalformedFunction { raw });
        }

        for token in parts[0].split(',') {
            let token = token.trim();
            if !token.is_empty() {
                ctx.add_bundle(Bundle::Custom(token.to_string()));
            }
        }
        ctx.set_value(OptionValue::Str(parts[1].trim().to_string()));
    }

    ctx.register_extension(Box::new(AjaxReloadFeature));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfiguration;

    fn run(
        option: &'static crate::option::ConfigOption,
        raw: &str,
        table: &mut TableConfiguration,
        updatable: bool,
    ) -> Result<OptionValue, ConfigError> {
        let value = option.parse(raw)?;
        let mut ctx = ProcessingContext::new(option, value, table, None, updatable);
        (super::super::dispatch(option.processor()))(&mut ctx)?;
        Ok(ctx.into_value())
    }

    #[test]
    fn pipelining_true_registers_feature_and_default_pipe_size() {
        let mut table = TableConfiguration::new("t1");
        run(&registry::AJAX_PIPELINING, "true", &mut table, false).unwrap();

        assert!(table.has_extension("pipelining"));
        assert_eq!(
            table.options().get(&&registry::AJAX_PIPESIZE),
            Some(&OptionValue::UInt(registry::DEFAULT_PIPE_SIZE))
        );
    }

    #[test]
    fn pipelining_keeps_explicit_pipe_size() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::AJAX_PIPESIZE, "3");
        run(&registry::AJAX_PIPELINING, "true", &mut table, false).unwrap();

        assert!(table.has_extension("pipelining"));
        // The staged value is untouched; no default overwrites it.
        assert!(table.options().get(&&registry::AJAX_PIPESIZE).is_none());
    }

    #[test]
    fn pipelining_false_registers_nothing() {
        let mut table = TableConfiguration::new("t1");
        run(&registry::AJAX_PIPELINING, "false", &mut table, false).unwrap();
        assert!(table.extension_names().is_empty());
        assert!(table.options().is_empty());
    }

    #[test]
    fn unrecognized_boolean_reads_as_disabled() {
        let mut table = TableConfiguration::new("t1");
        run(&registry::AJAX_PIPELINING, "weird", &mut table, false).unwrap();
        assert!(table.extension_names().is_empty());
    }

    #[test]
    fn reload_function_compound_form_adds_bundles_and_keeps_function() {
        let mut table = TableConfiguration::new("t1");
        let value = run(
            &registry::AJAX_RELOAD_FUNCTION,
            "bundle1, bundle2#myReloadFunction",
            &mut table,
            true,
        )
        .unwrap();

        assert_eq!(value.as_str(), Some("myReloadFunction"));
        assert_eq!(table.bundles().names(), vec!["bundle1", "bundle2"]);
        assert!(table.has_extension("ajaxReload"));
    }

    #[test]
    fn reload_function_bare_name_passes_through() {
        let mut table = TableConfiguration::new("t1");
        let value = run(
            &registry::AJAX_RELOAD_FUNCTION,
            "myReloadFunction",
            &mut table,
            true,
        )
        .unwrap();

        assert_eq!(value.as_str(), Some("myReloadFunction"));
        assert!(table.bundles().is_empty());
        assert!(table.has_extension("ajaxReload"));
    }

    #[test]
    fn reload_function_with_empty_bundle_part_is_fatal() {
        let mut table = TableConfiguration::new("t1");
        let err = run(
            &registry::AJAX_RELOAD_FUNCTION,
            "#myReloadFunction",
            &mut table,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedFunction { .. }));
    }

    #[test]
    fn reload_function_with_empty_function_part_is_fatal() {
        let mut table = TableConfiguration::new("t1");
        let err = run(&registry::AJAX_RELOAD_FUNCTION, "bundle1#", &mut table, true).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedFunction { .. }));
    }

    #[test]
    fn ajax_source_defers_to_server_side() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::AJAX_SERVERSIDE, "true");
        run(&registry::AJAX_SOURCE, "/data.json", &mut table, false).unwrap();
        assert!(!table.has_extension("ajax"));
    }

    #[test]
    fn ajax_source_alone_enables_ajax_feature() {
        let mut table = TableConfiguration::new("t1");
        run(&registry::AJAX_SOURCE, "/data.json", &mut table, false).unwrap();
        assert!(table.has_extension("ajax"));
    }

    #[test]
    fn server_side_true_registers_feature() {
        let mut table = TableConfiguration::new("t1");
        run(&registry::AJAX_SERVERSIDE, "true", &mut table, false).unwrap();
        assert!(table.has_extension("serverSide"));
    }
}
