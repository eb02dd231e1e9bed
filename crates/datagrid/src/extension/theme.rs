//! Theme extensions.
//!
//! A theme restyles the whole table and may adjust paging defaults to match
//! its pager markup. Only one theme is expected per table; the `theme`
//! option's processor registers the matching extension.

use serde_json::json;

use super::{Extension, ExtensionOutput, TableView};
use crate::bundle::Bundle;
use crate::error::ConfigError;
use crate::option::registry;

/// Bootstrap 2 table styling.
#[derive(Debug, Default)]
pub struct Bootstrap2Theme;

impl Extension for Bootstrap2Theme {
    fn name(&self) -> &'static str {
        "bootstrap2"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::ThemeBootstrap2);

        if table.bool_option(&registry::FEATURE_PAGEABLE).unwrap_or(false) {
            out.add_bundle(Bundle::PagingBootstrapSimple);
            if !table.is_option_set(&registry::FEATURE_PAGINGTYPE) {
                out.add_parameter("pagingType", "bootstrap_simple");
            }
        }

        // Bootstrap's own row striping replaces the widget's classes.
        out.add_parameter("stripeClasses", json!([]));
        Ok(())
    }
}

/// Bootstrap 3 table styling.
#[derive(Debug, Default)]
pub struct Bootstrap3Theme;

impl Extension for Bootstrap3Theme {
    fn name(&self) -> &'static str {
        "bootstrap3"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::ThemeBootstrap3);

        if table.bool_option(&registry::FEATURE_PAGEABLE).unwrap_or(false) {
            out.add_bundle(Bundle::PagingBootstrapFull);
            if !table.is_option_set(&registry::FEATURE_PAGINGTYPE) {
                out.add_parameter("pagingType", "bootstrap_full");
            }
        }

        out.add_parameter("stripeClasses", json!([]));
        Ok(())
    }
}

/// jQuery UI styling, with the skin selected by `themeOption`.
#[derive(Debug, Default)]
pub struct JQueryUiTheme;

impl Extension for JQueryUiTheme {
    fn name(&self) -> &'static str {
        "jqueryui"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::ThemeJQueryUi);
        out.add_parameter("jQueryUI", true);

        if let Some(skin) = table.str_option(&registry::CSS_THEMEOPTION) {
            if let Some(token) = registry::theme_option_token(&skin) {
                out.add_bundle(Bundle::JQueryUiSkin(token));
            }
        }
        Ok(())
    }
}
