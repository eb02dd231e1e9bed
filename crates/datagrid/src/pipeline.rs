//! The option-processing pipeline.
//!
//! A pass over a staged [`TableConfiguration`] runs three steps, each moving
//! the phase machine forward exactly once:
//!
//! 1. [`process_options`]: parse and process every staged entry, columns
//!    first, in staging order.
//! 2. [`apply_extensions`]: run setup for every registered extension, in
//!    registration order, merging each one's output into the table.
//! 3. [`finalize`]: seal the configuration.
//!
//! [`run`] chains the three. Calling a step out of phase is a programming
//! error and panics; data errors (bad values, failed setups) surface as
//! [`ConfigError`] and abort the pass.

use crate::config::{ColumnConfiguration, ConfigPhase, TableConfiguration};
use crate::error::ConfigError;
use crate::extension::{ExtensionOutput, TableView};
use crate::processor::{self, ProcessingContext};

/// Runs the full pass: options, extensions, finalization.
pub fn run(table: &mut TableConfiguration) -> Result<(), ConfigError> {
    process_options(table)?;
    apply_extensions(table)?;
    finalize(table);
    Ok(())
}

/// Parses and processes every staged entry into its typed value.
///
/// Columns are processed before the table so table-level extensions see
/// complete column options. Within each scope, entries are processed in
/// staging order; blank raw values are skipped. Auxiliary entries written
/// by processors land typed and are not re-processed.
///
/// # Errors
///
/// The first parse or processor error aborts the pass.
///
/// # Panics
///
/// If the configuration is not in the [`ConfigPhase::Staged`] phase.
pub fn process_options(table: &mut TableConfiguration) -> Result<(), ConfigError> {
    assert_eq!(
        table.phase(),
        ConfigPhase::Staged,
        "table \"{}\": options were already processed",
        table.table_id()
    );

    let mut columns = table.take_columns();
    let outcome: Result<(), ConfigError> = (|| {
        for column in &mut columns {
            process_column(table, column)?;
        }
        Ok(())
    })();
    table.restore_columns(columns);
    outcome?;

    // Snapshot the staged keys: entries staged after this point belong to
    // processors and are carried through without a processing round.
    let staged: Vec<_> = table.staged_mut().keys().copied().collect();
    for option in staged {
        let Some(raw) = table.staged_mut().shift_remove(&option) else {
            continue;
        };
        if raw.trim().is_empty() {
            tracing::trace!(option = option.key(), "skipping blank value");
            continue;
        }
        tracing::debug!(option = option.key(), value = %raw, "processing table option");

        let typed = option.parse(&raw)?;
        let updatable = processor::bundle_graph_updatable(option.processor());
        let mut ctx = ProcessingContext::new(option, typed, table, None, updatable);
        (processor::dispatch(option.processor()))(&mut ctx)?;
        let value = ctx.into_value();
        table.set_option(option, value);
    }
    carry_leftover_table_entries(table)?;

    table.advance_phase(ConfigPhase::OptionsProcessed);
    Ok(())
}

fn process_column(
    table: &mut TableConfiguration,
    column: &mut ColumnConfiguration,
) -> Result<(), ConfigError> {
    let staged: Vec<_> = column.staged_mut().keys().copied().collect();
    for option in staged {
        let Some(raw) = column.staged_mut().shift_remove(&option) else {
            continue;
        };
        if raw.trim().is_empty() {
            tracing::trace!(option = option.key(), "skipping blank value");
            continue;
        }
        tracing::debug!(option = option.key(), value = %raw, "processing column option");

        let typed = option.parse(&raw)?;
        let updatable = processor::bundle_graph_updatable(option.processor());
        let mut ctx = ProcessingContext::new(option, typed, table, Some(column), updatable);
        (processor::dispatch(option.processor()))(&mut ctx)?;
        let value = ctx.into_value();
        column.set_option(option, value);
    }

    let leftovers: Vec<_> = column.staged_mut().drain(..).collect();
    for (option, raw) in leftovers {
        if !raw.trim().is_empty() {
            column.set_option(option, option.parse(&raw)?);
        }
    }

    table.merge_extensions(column.take_staged_extensions());
    Ok(())
}

fn carry_leftover_table_entries(table: &mut TableConfiguration) -> Result<(), ConfigError> {
    let leftovers: Vec<_> = table.staged_mut().drain(..).collect();
    for (option, raw) in leftovers {
        if !raw.trim().is_empty() && !table.options().contains_key(&option) {
            table.set_option(option, option.parse(&raw)?);
        }
    }
    Ok(())
}

/// Runs setup for every registered extension, in registration order.
///
/// Each extension reads the typed options through a [`TableView`] and
/// writes into a private [`ExtensionOutput`]; the output is merged into the
/// table before the next extension runs, so later extensions observe
/// earlier contributions through the merge policies.
///
/// # Errors
///
/// The first failing setup aborts the pass.
///
/// # Panics
///
/// If options have not been processed yet, or extensions already ran.
pub fn apply_extensions(table: &mut TableConfiguration) -> Result<(), ConfigError> {
    assert_eq!(
        table.phase(),
        ConfigPhase::OptionsProcessed,
        "table \"{}\": extensions may only run once, after option processing",
        table.table_id()
    );

    let extensions = table.take_extensions();
    for extension in &extensions {
        tracing::debug!(extension = extension.name(), "running extension setup");
        let mut out = ExtensionOutput::default();
        extension.setup(&TableView::new(table), &mut out)?;
        out.merge_into(table);
    }
    table.restore_extensions(extensions);

    table.advance_phase(ConfigPhase::ExtensionsApplied);
    Ok(())
}

/// Seals the configuration; any further mutation panics.
///
/// # Panics
///
/// If extensions have not been applied yet.
pub fn finalize(table: &mut TableConfiguration) {
    assert_eq!(
        table.phase(),
        ConfigPhase::ExtensionsApplied,
        "table \"{}\": cannot finalize before extensions are applied",
        table.table_id()
    );
    table.advance_phase(ConfigPhase::Finalized);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::registry;

    #[test]
    fn entries_are_processed_in_staging_order() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::FEATURE_DOM, "lfrtip");
        table.stage(&registry::AJAX_SOURCE, "/data.json");
        // Restaging dom keeps its original position.
        table.stage(&registry::FEATURE_DOM, "frti");

        process_options(&mut table).unwrap();
        let keys: Vec<&str> = table.options().keys().map(|o| o.key()).collect();
        assert_eq!(keys, vec!["dom", "ajaxSource"]);
    }

    #[test]
    fn blank_values_are_skipped() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::AJAX_SOURCE, "   ");
        process_options(&mut table).unwrap();
        assert!(table.options().is_empty());
        assert!(table.extension_names().is_empty());
    }

    #[test]
    fn parse_errors_abort_the_pass() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::AJAX_PIPESIZE, "abc");
        let err = process_options(&mut table).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn columns_are_processed_before_the_table() {
        let mut table = TableConfiguration::new("t1");
        let mut column = ColumnConfiguration::new();
        column.stage(&registry::FILTERABLE, "true");
        table.add_column(column);

        process_options(&mut table).unwrap();
        // The column's processor registered its feature on the table.
        assert!(table.has_extension("filtering"));
        assert_eq!(
            table.columns()[0].bool_option(&registry::FILTERABLE),
            Some(true)
        );
    }

    #[test]
    fn extension_setup_requires_processed_options() {
        let mut table = TableConfiguration::new("t1");
        process_options(&mut table).unwrap();
        apply_extensions(&mut table).unwrap();
        assert_eq!(table.phase(), ConfigPhase::ExtensionsApplied);
    }

    #[test]
    #[should_panic(expected = "already processed")]
    fn options_cannot_be_processed_twice() {
        let mut table = TableConfiguration::new("t1");
        process_options(&mut table).unwrap();
        process_options(&mut table).unwrap();
    }

    #[test]
    #[should_panic(expected = "only run once")]
    fn extensions_cannot_run_before_options() {
        let mut table = TableConfiguration::new("t1");
        apply_extensions(&mut table).unwrap();
    }

    #[test]
    fn run_finalizes_the_configuration() {
        let mut table = TableConfiguration::new("t1");
        table.stage(&registry::FEATURE_INFO, "true");
        run(&mut table).unwrap();
        assert_eq!(table.phase(), ConfigPhase::Finalized);
    }
}
