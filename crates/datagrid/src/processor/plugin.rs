//! Processors for the plugin option group: each boolean option registers
//! its plugin when enabled and does nothing otherwise.

use super::ProcessingContext;
use crate::error::ConfigError;
use crate::extension::plugin::{
    ColReorderPlugin, FixedHeaderPlugin, ResponsivePlugin, ScrollerPlugin,
};
use crate::extension::Extension;

fn when_enabled(
    ctx: &mut ProcessingContext<'_>,
    extension: Box<dyn Extension>,
) -> Result<(), ConfigError> {
    if ctx.value().as_bool() == Some(true) {
        ctx.register_extension(extension);
    }
    Ok(())
}

pub(super) fn scroller(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    when_enabled(ctx, Box::new(ScrollerPlugin))
}

pub(super) fn col_reorder(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    when_enabled(ctx, Box::new(ColReorderPlugin))
}

pub(super) fn fixed_header(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    when_enabled(ctx, Box::new(FixedHeaderPlugin))
}

pub(super) fn responsive(ctx: &mut ProcessingContext<'_>) -> Result<(), ConfigError> {
    when_enabled(ctx, Box::new(ResponsivePlugin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfiguration;
    use crate::option::registry;

    #[test]
    fn enabled_plugin_option_registers_extension() {
        let mut table = TableConfiguration::new("t1");
        let value = registry::PLUGIN_SCROLLER.parse("true").unwrap();
        let mut ctx =
            ProcessingContext::new(&registry::PLUGIN_SCROLLER, value, &mut table, None, false);
        scroller(&mut ctx).unwrap();
        drop(ctx);
        assert!(table.has_extension("scroller"));
    }

    #[test]
    fn disabled_plugin_option_is_a_no_op() {
        let mut table = TableConfiguration::new("t1");
        let value = registry::PLUGIN_RESPONSIVE.parse("false").unwrap();
        let mut ctx =
            ProcessingContext::new(&registry::PLUGIN_RESPONSIVE, value, &mut table, None, false);
        responsive(&mut ctx).unwrap();
        drop(ctx);
        assert!(table.extension_names().is_empty());
    }
}
