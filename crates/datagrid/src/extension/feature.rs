//! Built-in feature extensions.
//!
//! Features are registered by option processors when the corresponding
//! option is enabled and contribute the wiring that option implies.

use serde_json::json;

use super::{Extension, ExtensionOutput, TableView};
use crate::bundle::Bundle;
use crate::callback::CallbackType;
use crate::error::ConfigError;
use crate::option::registry;

/// Client-side AJAX loading: the table fetches its rows from `ajaxSource`
/// once and renders locally.
#[derive(Debug, Default)]
pub struct AjaxFeature;

impl Extension for AjaxFeature {
    fn name(&self) -> &'static str {
        "ajax"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        let url = table.str_option(&registry::AJAX_SOURCE).ok_or_else(|| {
            ConfigError::extension_setup(self.name(), "option \"ajaxSource\" is required")
        })?;

        out.add_parameter("deferRender", true);
        out.add_parameter("ajax", json!({ "url": url, "dataSrc": "" }));
        // Without the column adjustment the first draw renders stale widths.
        out.add_callback(
            CallbackType::Init,
            format!("{}.columns.adjust().draw();", table.js_var()),
        );
        Ok(())
    }
}

/// Server-side processing: paging, sorting and filtering round-trip to the
/// server on every interaction.
#[derive(Debug, Default)]
pub struct ServerSideFeature;

impl Extension for ServerSideFeature {
    fn name(&self) -> &'static str {
        "serverSide"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        let url = table.str_option(&registry::AJAX_SOURCE).ok_or_else(|| {
            ConfigError::extension_setup(
                self.name(),
                "option \"ajaxSource\" is required when server-side processing is enabled",
            )
        })?;

        out.add_parameter("serverSide", true);

        match table.option_value(&registry::AJAX_PARAMS) {
            Some(extra) => {
                // A params factory was supplied: the request object is built
                // at document-ready time so the factory can close over page
                // state, then the fixed entries are overlaid.
                let params_var = format!("{}_params", table.js_var());
                let extra = extra.as_js().map(|js| js.as_str().to_string()).unwrap_or_default();
                out.append_doc_ready(format!(
                    "{p}.ajax = {extra}();\n{p}.ajax.url = '{url}';\n{p}.ajax.dataSrc = 'data';\n",
                    p = params_var,
                    extra = extra,
                    url = url,
                ));
            }
            None => {
                out.add_parameter("ajax", json!({ "url": url, "dataSrc": "data" }));
            }
        }

        out.add_callback(
            CallbackType::Init,
            format!("{}.columns.adjust().draw();", table.js_var()),
        );
        Ok(())
    }
}

/// AJAX request pipelining: pages are fetched in batches of `pipeSize` to
/// cut request volume during paging.
#[derive(Debug, Default)]
pub struct PipeliningFeature;

impl Extension for PipeliningFeature {
    fn name(&self) -> &'static str {
        "pipelining"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::AjaxPipelining);

        let pages = table
            .uint_option(&registry::AJAX_PIPESIZE)
            .unwrap_or(registry::DEFAULT_PIPE_SIZE);
        let url = table.str_option(&registry::AJAX_SOURCE).unwrap_or_default();
        out.append_doc_ready(format!(
            "{p}.ajax = $.fn.dataTable.pipeline({{ url: '{url}', pages: {pages} }});\n",
            p = format!("{}_params", table.js_var()),
            url = url,
            pages = pages,
        ));
        Ok(())
    }
}

/// Binds a reload control to the table: clicking the configured selector
/// re-fetches the AJAX source, through a custom function if one was named.
#[derive(Debug, Default)]
pub struct AjaxReloadFeature;

impl Extension for AjaxReloadFeature {
    fn name(&self) -> &'static str {
        "ajaxReload"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        let selector = table
            .str_option(&registry::AJAX_RELOAD_SELECTOR)
            .unwrap_or_else(|| format!("#{}_reload", table.table_id()));

        let body = match table.str_option(&registry::AJAX_RELOAD_FUNCTION) {
            Some(function) => format!("{}({});", function, table.js_var()),
            None => format!("{}.ajax.reload();", table.js_var()),
        };
        out.append_doc_ready(format!(
            "$('{selector}').on('click', function() {{ {body} }});\n",
            selector = selector,
            body = body,
        ));
        Ok(())
    }
}

/// Pulls in the comparator bundle for every column that configured a
/// custom `sortType`.
#[derive(Debug, Default)]
pub struct SortingFeature;

impl Extension for SortingFeature {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        for column in table.columns() {
            if let Some(sort_type) = column.str_option(&registry::SORT_TYPE) {
                if let Some(token) = registry::sort_type_token(&sort_type) {
                    out.add_bundle(Bundle::Sorting(token));
                }
            }
        }
        Ok(())
    }
}

/// Column filtering widgets for every column marked filterable.
#[derive(Debug, Default)]
pub struct FilteringFeature;

impl Extension for FilteringFeature {
    fn name(&self) -> &'static str {
        "filtering"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        out.add_bundle(Bundle::Yadcf);

        let mut filters = Vec::new();
        for column in table.columns() {
            if column.bool_option(&registry::FILTERABLE).unwrap_or(false) {
                let filter_type = column
                    .str_option(&registry::FILTER_TYPE)
                    .unwrap_or_else(|| "input".to_string());
                filters.push(json!({
                    "column_number": column.index(),
                    "filter_type": widget_filter_type(&filter_type),
                }));
            }
        }

        out.append_doc_ready(format!(
            "yadcf.init({var}, {filters});\n",
            var = table.js_var(),
            filters = serde_json::Value::Array(filters),
        ));
        Ok(())
    }
}

fn widget_filter_type(token: &str) -> &'static str {
    match token {
        "select" => "select",
        "number" => "range_number",
        "date" => "date",
        _ => "text",
    }
}

/// Applies the configured paging style and its pager bundle.
#[derive(Debug, Default)]
pub struct PagingTypeFeature;

impl Extension for PagingTypeFeature {
    fn name(&self) -> &'static str {
        "pagingType"
    }

    fn setup(&self, table: &TableView<'_>, out: &mut ExtensionOutput) -> Result<(), ConfigError> {
        let Some(paging_type) = table.str_option(&registry::FEATURE_PAGINGTYPE) else {
            return Ok(());
        };

        out.add_parameter("pagingType", paging_type.clone());
        match paging_type.as_str() {
            "input" => out.add_bundle(Bundle::PagingInput),
            "listbox" => out.add_bundle(Bundle::PagingListbox),
            "scrolling" => out.add_bundle(Bundle::PagingScrolling),
            "bootstrap_simple" => out.add_bundle(Bundle::PagingBootstrapSimple),
            "bootstrap_full" => out.add_bundle(Bundle::PagingBootstrapFull),
            // simple/simple_numbers/full/full_numbers ship with the core.
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfiguration;
    use crate::option::OptionValue;

    fn table_with_source() -> TableConfiguration {
        let mut table = TableConfiguration::new("fakeId");
        table.set_option(
            &registry::AJAX_SOURCE,
            OptionValue::Str("/data.json".to_string()),
        );
        table
    }

    #[test]
    fn ajax_feature_requires_source() {
        let table = TableConfiguration::new("t1");
        let mut out = ExtensionOutput::default();
        let err = AjaxFeature.setup(&TableView::new(&table), &mut out).unwrap_err();
        assert!(matches!(err, ConfigError::ExtensionSetup { .. }));
    }

    #[test]
    fn ajax_feature_sets_defer_render_and_source() {
        let table = table_with_source();
        let mut out = ExtensionOutput::default();
        AjaxFeature.setup(&TableView::new(&table), &mut out).unwrap();

        let mut target = table_with_source();
        out.merge_into(&mut target);
        assert_eq!(target.params().get("deferRender"), Some(&json!(true)));
        assert_eq!(
            target.params().get("ajax"),
            Some(&json!({ "url": "/data.json", "dataSrc": "" }))
        );
        let init = target.callbacks().find(CallbackType::Init).unwrap();
        assert!(init.function().body().contains("oTable_fakeId"));
    }

    #[test]
    fn pipelining_feature_uses_configured_pipe_size() {
        let mut table = table_with_source();
        table.set_option(&registry::AJAX_PIPESIZE, OptionValue::UInt(3));
        let mut out = ExtensionOutput::default();
        PipeliningFeature.setup(&TableView::new(&table), &mut out).unwrap();

        let mut target = table_with_source();
        out.merge_into(&mut target);
        assert!(target.bundles().contains(&Bundle::AjaxPipelining));
        assert!(target.doc_ready()[0].as_str().contains("pages: 3"));
    }

    #[test]
    fn ajax_reload_defaults_selector_and_function() {
        let table = table_with_source();
        let mut out = ExtensionOutput::default();
        AjaxReloadFeature.setup(&TableView::new(&table), &mut out).unwrap();

        let mut target = table_with_source();
        out.merge_into(&mut target);
        let code = target.doc_ready()[0].as_str();
        assert!(code.contains("#fakeId_reload"));
        assert!(code.contains("oTable_fakeId.ajax.reload();"));
    }

    #[test]
    fn paging_type_feature_maps_bundles() {
        let mut table = TableConfiguration::new("t1");
        table.set_option(
            &registry::FEATURE_PAGINGTYPE,
            OptionValue::Str("input".to_string()),
        );
        let mut out = ExtensionOutput::default();
        PagingTypeFeature.setup(&TableView::new(&table), &mut out).unwrap();

        let mut target = TableConfiguration::new("t1");
        out.merge_into(&mut target);
        assert_eq!(target.params().get("pagingType"), Some(&json!("input")));
        assert!(target.bundles().contains(&Bundle::PagingInput));
    }
}
