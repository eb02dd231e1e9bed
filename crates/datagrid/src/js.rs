//! Small JavaScript value carriers.
//!
//! The pipeline accumulates fragments of JavaScript that the downstream HTML
//! builder splices into the widget-initialization script. Two shapes exist:
//!
//! - [`JsSnippet`]: a raw expression that must be emitted unquoted (an array
//!   literal, an object literal, a function reference).
//! - [`JsFunction`]: an anonymous function with a fixed formal argument list
//!   to which callback code is appended over the course of a pass.

use std::fmt;

use serde::Serialize;

/// A raw JavaScript expression, emitted without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JsSnippet(pub String);

impl JsSnippet {
    /// Wraps the given expression.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An anonymous JavaScript function with a fixed signature.
///
/// The formal argument list and the return requirement come from the
/// lifecycle event the function is bound to; callers only supply statement
/// code. Repeated [`append_code`](JsFunction::append_code) calls concatenate
/// statements in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsFunction {
    args: &'static [&'static str],
    returns: bool,
    body: String,
}

impl JsFunction {
    /// Creates a function with the given initial body.
    pub fn new(code: impl Into<String>, args: &'static [&'static str], returns: bool) -> Self {
        Self {
            args,
            returns,
            body: code.into(),
        }
    }

    /// The formal argument names.
    pub fn args(&self) -> &'static [&'static str] {
        self.args
    }

    /// True if the wrapping lifecycle event requires a return value.
    pub fn returns(&self) -> bool {
        self.returns
    }

    /// The accumulated statement body, without the function wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Appends statements after the existing body.
    ///
    /// Callers are responsible for producing self-contained statements; no
    /// semantic merging happens beyond ordered concatenation.
    pub fn append_code(&mut self, code: &str) {
        self.body.push_str(code);
    }

    /// Renders the complete `function(...) { ... }` literal.
    ///
    /// When a return value is required and the body does not already return,
    /// the body is prefixed with `return `.
    pub fn render(&self) -> String {
        let body = if self.returns && !self.body.trim_start().starts_with("return") {
            format!("return {}", self.body)
        } else {
            self.body.clone()
        };
        format!("function({}){{{}}}", self.args.join(","), body)
    }
}

impl fmt::Display for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
