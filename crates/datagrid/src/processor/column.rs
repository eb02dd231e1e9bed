//! Processors for column-scope options that have table-wide effects.

use super::ProcessingContext;
use crate::error::ConfigError;
use crate::extension::feature::{FilteringFeature, SortingFeature};

/// `sortType`: a custom comparator on any column pulls in the sorting
/// feature once; setup walks all columns for their comparator bundles.
pub(super) fn sort_type(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    ctx.register_extension(Box::new(SortingFeature));
    Ok(())
}

/// `filterable`: the first filterable column pulls in the filtering
/// feature; setup builds the per-column widget list.
pub(super) fn filterable(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    if ctx.value().as_bool() == Some(true) {
        ctx.register_extension(Box::new(FilteringFeature));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnConfiguration, TableConfiguration};
    use crate::option::registry;

    #[test]
    fn sort_type_registers_sorting_once() {
        let mut table = TableConfiguration::new("t1");
        for _ in 0..2 {
            let mut column = ColumnConfiguration::new();
            let value = registry::SORT_TYPE.parse("natural").unwrap();
            let mut ctx = ProcessingContext::new(
                &registry::SORT_TYPE,
                value,
                &mut table,
                Some(&mut column),
                false,
            );
            sort_type(&mut ctx).unwrap();
        }
        assert_eq!(table.extension_names(), vec!["sorting"]);
    }

    #[test]
    fn filterable_false_registers_nothing() {
        let mut table = TableConfiguration::new("t1");
        let mut column = ColumnConfiguration::new();
        let value = registry::FILTERABLE.parse("false").unwrap();
        let mut ctx = ProcessingContext::new(
            &registry::FILTERABLE,
            value,
            &mut table,
            Some(&mut column),
            false,
        );
        filterable(&mut ctx).unwrap();
        drop(ctx);
        assert!(table.extension_names().is_empty());
    }
}
