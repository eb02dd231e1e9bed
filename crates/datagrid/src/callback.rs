//! Lifecycle callbacks contributed by options and extensions.
//!
//! Each lifecycle event type maps to one widget configuration key and
//! declares the formal argument list its handler receives, plus whether the
//! handler must return a value. A table carries at most one callback per
//! event type; repeated registrations append code to the existing body
//! instead of creating duplicates.

use crate::js::JsFunction;

/// Lifecycle events exposed by the table widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackType {
    /// A row's DOM node was created.
    CreatedRow,
    /// The table finished a draw.
    Draw,
    /// The footer is about to be drawn.
    Footer,
    /// A number is being formatted for display.
    Format,
    /// The header is about to be drawn.
    Header,
    /// The information summary is being built.
    Info,
    /// The table finished initializing.
    Init,
    /// A draw is about to start.
    PreDraw,
    /// A row is about to be drawn.
    Row,
}

impl CallbackType {
    /// The widget configuration key this callback is attached to.
    pub fn name(&self) -> &'static str {
        match self {
            CallbackType::CreatedRow => "createdRow",
            CallbackType::Draw => "drawCallback",
            CallbackType::Footer => "footerCallback",
            CallbackType::Format => "formatNumber",
            CallbackType::Header => "headerCallback",
            CallbackType::Info => "infoCallback",
            CallbackType::Init => "initComplete",
            CallbackType::PreDraw => "preDrawCallback",
            CallbackType::Row => "rowCallback",
        }
    }

    /// The formal argument list the handler is declared with.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            CallbackType::CreatedRow => &["row", "data", "dataIndex"],
            CallbackType::Draw => &["oSettings"],
            CallbackType::Footer => &["nFoot", "aData", "iStart", "iEnd", "aiDisplay"],
            CallbackType::Format => &["iIn"],
            CallbackType::Header => &["nHead", "aData", "iStart", "iEnd", "aiDisplay"],
            CallbackType::Info => &["oSettings", "iStart", "iEnd", "iMax", "iTotal", "sPre"],
            CallbackType::Init => &["oSettings", "json"],
            CallbackType::PreDraw => &["oSettings"],
            CallbackType::Row => &["nRow", "aData", "iDisplayIndex"],
        }
    }

    /// True if the handler must return a value.
    pub fn returns(&self) -> bool {
        matches!(
            self,
            CallbackType::Format | CallbackType::Info | CallbackType::PreDraw
        )
    }
}

/// One accumulated callback for a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    ty: CallbackType,
    function: JsFunction,
}

impl Callback {
    /// Creates a callback whose function body is `code`, declared with the
    /// argument list and return requirement mandated by `ty`.
    pub fn new(ty: CallbackType, code: impl Into<String>) -> Self {
        Self {
            ty,
            function: JsFunction::new(code, ty.args(), ty.returns()),
        }
    }

    /// The lifecycle event this callback handles.
    pub fn callback_type(&self) -> CallbackType {
        self.ty
    }

    /// The accumulated function.
    pub fn function(&self) -> &JsFunction {
        &self.function
    }

    /// Appends statements to the function body.
    pub fn append_code(&mut self, code: &str) {
        self.function.append_code(code);
    }
}

/// The per-table callback registry.
///
/// Cardinality is bounded by the number of distinct lifecycle events, so
/// linear scans are fine here.
#[derive(Debug, Clone, Default)]
pub struct CallbackSet {
    callbacks: Vec<Callback>,
}

impl CallbackSet {
    /// Creates an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers callback code for a lifecycle event.
    ///
    /// Creates the callback if none exists for `ty`; otherwise appends `code`
    /// to the existing body in registration order.
    pub fn register(&mut self, ty: CallbackType, code: &str) {
        match self.callbacks.iter_mut().find(|c| c.ty == ty) {
            Some(existing) => existing.append_code(code),
            None => self.callbacks.push(Callback::new(ty, code)),
        }
    }

    /// Returns true if a callback exists for the given event.
    pub fn has(&self, ty: CallbackType) -> bool {
        self.callbacks.iter().any(|c| c.ty == ty)
    }

    /// Finds the callback for the given event, if any.
    pub fn find(&self, ty: CallbackType) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.ty == ty)
    }

    /// All callbacks, in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Callback> {
        self.callbacks.iter()
    }

    /// Number of distinct callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns true if no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_creates_then_appends() {
        let mut set = CallbackSet::new();
        set.register(CallbackType::Init, "a();");
        set.register(CallbackType::Init, "b();");

        assert_eq!(set.len(), 1);
        let body = set.find(CallbackType::Init).unwrap().function().body();
        let a = body.find("a();").unwrap();
        let b = body.find("b();").unwrap();
        assert!(a < b);
    }

    #[test]
    fn distinct_types_stay_distinct() {
        let mut set = CallbackSet::new();
        set.register(CallbackType::Init, "a();");
        set.register(CallbackType::Draw, "b();");

        assert_eq!(set.len(), 2);
        assert!(set.has(CallbackType::Init));
        assert!(set.has(CallbackType::Draw));
        assert!(!set.has(CallbackType::Row));
    }

    #[test]
    fn callback_wraps_mandated_signature() {
        let callback = Callback::new(CallbackType::Init, "a();");
        assert_eq!(
            callback.function().render(),
            "function(oSettings,json){a();}"
        );
    }

    #[test]
    fn returning_types_are_prefixed() {
        let callback = Callback::new(CallbackType::PreDraw, "true;");
        assert!(callback.function().render().contains("return true;"));
    }
}
