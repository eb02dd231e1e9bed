//! Processors for the styling option group.

use super::ProcessingContext;
use crate::error::ConfigError;
use crate::extension::feature::PagingTypeFeature;
use crate::extension::theme::{Bootstrap2Theme, Bootstrap3Theme, JQueryUiTheme};

/// `theme`: registers the matching theme extension. The token was already
/// canonicalized by parsing, so every arm is covered.
pub(super) fn theme(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    match ctx.value().as_str() {
        Some("bootstrap2") => ctx.register_extension(Box::new(Bootstrap2Theme)),
        Some("bootstrap3") => ctx.register_extension(Box::new(Bootstrap3Theme)),
        Some("jqueryui") => ctx.register_extension(Box::new(JQueryUiTheme)),
        _ => {}
    }
    Ok(())
}

/// `pagingType`: registers the paging-style feature, which emits the
/// parameter and pulls in the pager bundle during setup.
pub(super) fn paging_type(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    ctx.register_extension(Box::new(PagingTypeFeature));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfiguration;
    use crate::option::registry;

    #[test]
    fn theme_token_selects_extension() {
        let mut table = TableConfiguration::new("t1");
        let value = registry::CSS_THEME.parse("Bootstrap3").unwrap();
        let mut ctx = ProcessingContext::new(&registry::CSS_THEME, value, &mut table, None, false);
        theme(&mut ctx).unwrap();
        drop(ctx);
        assert!(table.has_extension("bootstrap3"));
    }

    #[test]
    fn paging_type_registers_feature() {
        let mut table = TableConfiguration::new("t1");
        let value = registry::FEATURE_PAGINGTYPE.parse("input").unwrap();
        let mut ctx =
            ProcessingContext::new(&registry::FEATURE_PAGINGTYPE, value, &mut table, None, false);
        paging_type(&mut ctx).unwrap();
        drop(ctx);
        assert!(table.has_extension("pagingType"));
    }
}
