//! The static option catalog.
//!
//! Every option the staging collectors may hand to the pipeline is declared
//! here as a `&'static` singleton. [`resolve`] binds a raw key and scope to
//! its descriptor; an unrecognized key is a fatal configuration error.
//!
//! The registry performs no I/O and holds no mutable state, so it is safely
//! shared across concurrent render passes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{ConfigOption, OptionDefault, OptionScope, ValueKind};
use crate::error::ConfigError;
use crate::processor::ProcessorId;

/// Default AJAX pipe size applied when pipelining is enabled without an
/// explicit `pipeSize`.
pub const DEFAULT_PIPE_SIZE: u64 = 5;

/// Legal `theme` tokens.
pub const THEMES: &[&str] = &["bootstrap2", "bootstrap3", "jqueryui"];

/// Legal `themeOption` tokens (jQuery UI skins).
pub const THEME_OPTIONS: &[&str] = &[
    "blacktie",
    "blitzer",
    "cupertino",
    "darkhive",
    "eggplant",
    "flick",
    "humanity",
    "redmond",
    "smoothness",
    "start",
    "sunny",
    "vader",
];

/// Legal `pagingType` tokens.
pub const PAGING_TYPES: &[&str] = &[
    "simple",
    "simple_numbers",
    "full",
    "full_numbers",
    "input",
    "listbox",
    "scrolling",
    "bootstrap_simple",
    "bootstrap_full",
];

/// Legal `sortType` tokens, each backed by a comparator bundle.
pub const SORT_TYPES: &[&str] = &[
    "alt_string",
    "anti_the",
    "chinese_string",
    "date_de",
    "date_eu",
    "date_euro",
    "date_uk",
    "filesize",
    "ip",
    "natural",
    "persian",
    "scientific",
    "signed_num",
    "turkish_string",
];

/// Legal `filterType` tokens.
pub const FILTER_TYPES: &[&str] = &["input", "select", "number", "date"];

macro_rules! option {
    ($name:ident, $key:literal, $scope:ident, $kind:expr, $default:expr, $processor:ident) => {
        pub static $name: ConfigOption = ConfigOption {
            key: $key,
            scope: OptionScope::$scope,
            kind: $kind,
            default: $default,
            processor: ProcessorId::$processor,
        };
    };
}

// Table features.
option!(FEATURE_INFO, "info", Table, ValueKind::Bool, OptionDefault::None, PassThrough);
option!(FEATURE_PAGEABLE, "pageable", Table, ValueKind::Bool, OptionDefault::None, PassThrough);
option!(FEATURE_PAGINGTYPE, "pagingType", Table, ValueKind::Token(PAGING_TYPES), OptionDefault::None, PagingType);
option!(FEATURE_DOM, "dom", Table, ValueKind::Str, OptionDefault::None, PassThrough);
option!(FEATURE_FILTERABLE, "filterable", Table, ValueKind::Bool, OptionDefault::None, PassThrough);
option!(FEATURE_SCROLLY, "scrollY", Table, ValueKind::Str, OptionDefault::None, PassThrough);
option!(FEATURE_JQUERYUI, "jqueryui", Table, ValueKind::Bool, OptionDefault::None, PassThrough);
option!(FEATURE_LENGTHMENU, "lengthMenu", Table, ValueKind::Js, OptionDefault::None, PassThrough);

// Table CSS.
option!(CSS_CLASS, "cssClass", Table, ValueKind::Str, OptionDefault::None, PassThrough);
option!(CSS_STYLE, "cssStyle", Table, ValueKind::Str, OptionDefault::None, PassThrough);
option!(CSS_STRIPECLASSES, "stripeClasses", Table, ValueKind::Js, OptionDefault::None, PassThrough);
option!(CSS_THEME, "theme", Table, ValueKind::Token(THEMES), OptionDefault::None, Theme);
option!(CSS_THEMEOPTION, "themeOption", Table, ValueKind::Token(THEME_OPTIONS), OptionDefault::None, PassThrough);

// Table AJAX.
option!(AJAX_SOURCE, "ajaxSource", Table, ValueKind::Str, OptionDefault::None, AjaxSource);
option!(AJAX_PARAMS, "ajaxParams", Table, ValueKind::Js, OptionDefault::None, PassThrough);
option!(AJAX_SERVERSIDE, "serverSide", Table, ValueKind::Bool, OptionDefault::None, ServerSide);
option!(AJAX_PIPELINING, "pipelining", Table, ValueKind::Bool, OptionDefault::Bool(false), Pipelining);
option!(AJAX_PIPESIZE, "pipeSize", Table, ValueKind::UInt, OptionDefault::UInt(DEFAULT_PIPE_SIZE), PassThrough);
option!(AJAX_RELOAD_SELECTOR, "reloadSelector", Table, ValueKind::Str, OptionDefault::None, ReloadSelector);
option!(AJAX_RELOAD_FUNCTION, "reloadFunction", Table, ValueKind::Str, OptionDefault::None, ReloadFunction);
option!(AJAX_DEFERRENDER, "deferRender", Table, ValueKind::Bool, OptionDefault::None, PassThrough);

// Table plugins.
option!(PLUGIN_SCROLLER, "scroller", Table, ValueKind::Bool, OptionDefault::None, PluginScroller);
option!(PLUGIN_COLREORDER, "colReorder", Table, ValueKind::Bool, OptionDefault::None, PluginColReorder);
option!(PLUGIN_FIXEDHEADER, "fixedHeader", Table, ValueKind::Bool, OptionDefault::None, PluginFixedHeader);
option!(PLUGIN_RESPONSIVE, "responsive", Table, ValueKind::Bool, OptionDefault::None, PluginResponsive);

// Table i18n.
option!(I18N_MESSAGE_RESOLVER, "messageResolver", Table, ValueKind::Str, OptionDefault::None, MessageResolver);

// Column options.
option!(PROPERTY, "property", Column, ValueKind::Str, OptionDefault::None, PassThrough);
option!(TITLE, "title", Column, ValueKind::Str, OptionDefault::None, PassThrough);
option!(DEFAULT_CONTENT, "default", Column, ValueKind::Str, OptionDefault::None, PassThrough);
option!(SORTABLE, "sortable", Column, ValueKind::Bool, OptionDefault::Bool(true), PassThrough);
option!(SORT_DIRECTION, "sortDirection", Column, ValueKind::SortDirectionList, OptionDefault::None, PassThrough);
option!(SORT_INIT_DIRECTION, "sortInitDirection", Column, ValueKind::Token(&["asc", "desc"]), OptionDefault::None, PassThrough);
option!(SORT_INIT_ORDER, "sortInitOrder", Column, ValueKind::UInt, OptionDefault::None, PassThrough);
option!(SORT_TYPE, "sortType", Column, ValueKind::Token(SORT_TYPES), OptionDefault::None, SortType);
option!(FILTERABLE, "filterable", Column, ValueKind::Bool, OptionDefault::Bool(false), Filterable);
option!(FILTER_TYPE, "filterType", Column, ValueKind::Token(FILTER_TYPES), OptionDefault::Str("input"), PassThrough);
option!(SEARCHABLE, "searchable", Column, ValueKind::Bool, OptionDefault::Bool(true), PassThrough);
option!(VISIBLE, "visible", Column, ValueKind::Bool, OptionDefault::Bool(true), PassThrough);
option!(CSS_CELLCLASS, "cssCellClass", Column, ValueKind::Str, OptionDefault::None, PassThrough);

/// Every registered option, table scope first.
pub static ALL: &[&ConfigOption] = &[
    &FEATURE_INFO,
    &FEATURE_PAGEABLE,
    &FEATURE_PAGINGTYPE,
    &FEATURE_DOM,
    &FEATURE_FILTERABLE,
    &FEATURE_SCROLLY,
    &FEATURE_JQUERYUI,
    &FEATURE_LENGTHMENU,
    &CSS_CLASS,
    &CSS_STYLE,
    &CSS_STRIPECLASSES,
    &CSS_THEME,
    &CSS_THEMEOPTION,
    &AJAX_SOURCE,
    &AJAX_PARAMS,
    &AJAX_SERVERSIDE,
    &AJAX_PIPELINING,
    &AJAX_PIPESIZE,
    &AJAX_RELOAD_SELECTOR,
    &AJAX_RELOAD_FUNCTION,
    &AJAX_DEFERRENDER,
    &PLUGIN_SCROLLER,
    &PLUGIN_COLREORDER,
    &PLUGIN_FIXEDHEADER,
    &PLUGIN_RESPONSIVE,
    &I18N_MESSAGE_RESOLVER,
    &PROPERTY,
    &TITLE,
    &DEFAULT_CONTENT,
    &SORTABLE,
    &SORT_DIRECTION,
    &SORT_INIT_DIRECTION,
    &SORT_INIT_ORDER,
    &SORT_TYPE,
    &FILTERABLE,
    &FILTER_TYPE,
    &SEARCHABLE,
    &VISIBLE,
    &CSS_CELLCLASS,
];

static BY_KEY: Lazy<HashMap<(OptionScope, &'static str), &'static ConfigOption>> =
    Lazy::new(|| {
        let mut map = HashMap::with_capacity(ALL.len());
        for option in ALL {
            let previous = map.insert((option.scope, option.key), *option);
            debug_assert!(
                previous.is_none(),
                "duplicate option registration: {} ({})",
                option.key,
                option.scope
            );
        }
        map
    });

/// Resolves a raw configuration key against the catalog.
///
/// # Errors
///
/// [`ConfigError::UnknownOption`] when no option with the given key exists in
/// the given scope.
pub fn resolve(key: &str, scope: OptionScope) -> Result<&'static ConfigOption, ConfigError> {
    BY_KEY
        .get(&(scope, key))
        .copied()
        .ok_or_else(|| ConfigError::UnknownOption {
            key: key.to_string(),
            scope,
        })
}

/// Maps a sort-type value back to its canonical static token.
pub fn sort_type_token(value: &str) -> Option<&'static str> {
    SORT_TYPES.iter().find(|t| **t == value).copied()
}

/// Maps a theme-option value back to its canonical static token.
pub fn theme_option_token(value: &str) -> Option<&'static str> {
    THEME_OPTIONS.iter().find(|t| **t == value).copied()
}
