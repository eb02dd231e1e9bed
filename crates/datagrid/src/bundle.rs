//! Asset bundles required by a rendered table.
//!
//! A bundle is a named unit of front-end assets (scripts and stylesheets)
//! that the downstream asset loader knows how to serve. The pipeline only
//! accumulates bundle *names*; transitive bundle dependencies are a property
//! of the host's bundle catalog, not of this layer.
//!
//! [`BundleGraph`] is a set with insertion order preserved, so the ordered
//! list handed to the asset loader is deterministic for a given pass.

/// A named front-end asset bundle.
///
/// Well-known bundles cover the widget core, its plugins, themes, and the
/// per-sort-type comparators. Host applications can request arbitrary
/// additional bundles through [`Bundle::Custom`], which is what the
/// `bundles#function` reload syntax produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bundle {
    /// The core table widget.
    DataTables,
    /// Virtual-scrolling plugin.
    Scroller,
    /// Column-reordering plugin.
    ColReorder,
    /// Fixed-header plugin.
    FixedHeader,
    /// Responsive-layout plugin.
    Responsive,
    /// Column-filtering widget.
    Yadcf,
    /// AJAX request pipelining support.
    AjaxPipelining,
    /// Bootstrap 2 theme.
    ThemeBootstrap2,
    /// Bootstrap 3 theme.
    ThemeBootstrap3,
    /// jQuery UI theme scaffolding.
    ThemeJQueryUi,
    /// A jQuery UI skin, by skin name.
    JQueryUiSkin(&'static str),
    /// Bootstrap-styled simple pager.
    PagingBootstrapSimple,
    /// Bootstrap-styled full pager.
    PagingBootstrapFull,
    /// Input-box pager.
    PagingInput,
    /// Listbox pager.
    PagingListbox,
    /// Infinite-scrolling pager.
    PagingScrolling,
    /// A sort-type comparator bundle, by sort-type token.
    Sorting(&'static str),
    /// A host-supplied bundle requested by name.
    Custom(String),
}

impl Bundle {
    /// The name under which the asset loader knows this bundle.
    pub fn name(&self) -> String {
        match self {
            Bundle::DataTables => "datatables".to_string(),
            Bundle::Scroller => "datatables-scroller".to_string(),
            Bundle::ColReorder => "datatables-colreorder".to_string(),
            Bundle::FixedHeader => "datatables-fixedheader".to_string(),
            Bundle::Responsive => "datatables-responsive".to_string(),
            Bundle::Yadcf => "yadcf".to_string(),
            Bundle::AjaxPipelining => "datagrid-ajax-pipelining".to_string(),
            Bundle::ThemeBootstrap2 => "datagrid-theme-bootstrap2".to_string(),
            Bundle::ThemeBootstrap3 => "datagrid-theme-bootstrap3".to_string(),
            Bundle::ThemeJQueryUi => "datagrid-theme-jqueryui".to_string(),
            Bundle::JQueryUiSkin(skin) => format!("datagrid-theme-jqueryui-{}", skin),
            Bundle::PagingBootstrapSimple => "datagrid-paging-bootstrap-simple".to_string(),
            Bundle::PagingBootstrapFull => "datagrid-paging-bootstrap-full".to_string(),
            Bundle::PagingInput => "datagrid-paging-input".to_string(),
            Bundle::PagingListbox => "datagrid-paging-listbox".to_string(),
            Bundle::PagingScrolling => "datagrid-paging-scrolling".to_string(),
            Bundle::Sorting(ty) => format!("datagrid-sorting-{}", ty.replace('_', "-")),
            Bundle::Custom(name) => name.clone(),
        }
    }
}

/// The set of bundles required by one table, deduplicated, first-seen order.
#[derive(Debug, Clone, Default)]
pub struct BundleGraph {
    bundles: Vec<Bundle>,
}

impl BundleGraph {
    /// Creates an empty bundle graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bundle. Duplicates are no-ops; first-seen order is kept.
    pub fn add(&mut self, bundle: Bundle) {
        if !self.bundles.contains(&bundle) {
            self.bundles.push(bundle);
        }
    }

    /// Adds a host-supplied bundle by name.
    pub fn add_named(&mut self, name: impl Into<String>) {
        self.add(Bundle::Custom(name.into()));
    }

    /// The bundles in deterministic first-seen order.
    pub fn as_ordered_list(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Bundle names in deterministic first-seen order.
    pub fn names(&self) -> Vec<String> {
        self.bundles.iter().map(Bundle::name).collect()
    }

    /// Returns true if the graph contains the given bundle.
    pub fn contains(&self, bundle: &Bundle) -> bool {
        self.bundles.contains(bundle)
    }

    /// Number of distinct bundles.
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Returns true if no bundle has been requested.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
