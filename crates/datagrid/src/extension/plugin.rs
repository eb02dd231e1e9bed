//! Widget plugin extensions.

use super::{Extension, ExtensionOutput, TableView};
use crate::bundle::Bundle;
use crate::error::ConfigError;
use crate::option::registry;
use crate::params::MergeMode;

/// Virtual scrolling: renders only the visible window of rows.
#[derive(Debug, Default)]
pub struct ScrollerPlugin;

impl Extension for ScrollerPlugin {
    fn name(&self) -> &'static str {
        "scroller"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::Scroller);

        // The scroller pane is enabled through the "S" dom token. A
        // user-supplied dom keeps its layout with the pane appended;
        // otherwise a complete layout is installed.
        if table.str_option(&registry::FEATURE_DOM).is_some() {
            out.add_parameter_with_mode("dom", "S", MergeMode::Append);
        } else if table.bool_option(&registry::FEATURE_JQUERYUI).unwrap_or(false) {
            out.add_parameter("dom", "<\"H\"lfr>t<\"F\"ip>S");
        } else {
            out.add_parameter("dom", "frtiS");
        }
        Ok(())
    }
}

/// Drag-and-drop column reordering.
#[derive(Debug, Default)]
pub struct ColReorderPlugin;

impl Extension for ColReorderPlugin {
    fn name(&self) -> &'static str {
        "colReorder"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::ColReorder);

        // Reordering is enabled through the leading "R" dom token.
        if table.str_option(&registry::FEATURE_DOM).is_some() {
            out.add_parameter_with_mode("dom", "R", MergeMode::Prepend);
        } else {
            out.add_parameter("dom", "Rlfrtip");
        }
        Ok(())
    }
}

/// Keeps the header row visible while scrolling the page.
#[derive(Debug, Default)]
pub struct FixedHeaderPlugin;

impl Extension for FixedHeaderPlugin {
    fn name(&self) -> &'static str {
        "fixedHeader"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::FixedHeader);
        out.append_doc_ready(format!(
            "new $.fn.dataTable.FixedHeader({});\n",
            table.js_var()
        ));
        Ok(())
    }
}

/// Responsive column collapsing on narrow viewports.
#[derive(Debug, Default)]
pub struct ResponsivePlugin;

impl Extension for ResponsivePlugin {
    fn name(&self) -> &'static str {
        "responsive"
    }

    fn setup(&self, _table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::Responsive);
        out.add_parameter("responsive", true);
        Ok(())
    }
}
