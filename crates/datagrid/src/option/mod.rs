//! Typed configuration options.
//!
//! An option is an immutable, static descriptor binding a configuration key
//! to its scope, its value type, an optional default, and the processor that
//! runs when the option is staged. The full catalog lives in
//! [`registry`](crate::option::registry); collaborators never construct
//! options themselves, they resolve them by key.

pub mod registry;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ConfigError;
use crate::js::JsSnippet;
use crate::processor::ProcessorId;

/// Whether an option applies to a whole table or to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionScope {
    /// Table-level option.
    Table,
    /// Column-level option.
    Column,
}

impl fmt::Display for OptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionScope::Table => f.write_str("table"),
            OptionScope::Column => f.write_str("column"),
        }
    }
}

/// A sorting direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The legal raw tokens, as listed in error messages.
    pub const TOKENS: &'static [&'static str] = &["ASC", "DESC"];

    /// Parses a single token, case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(SortDirection::Asc),
            "DESC" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// The canonical token for this direction.
    pub fn token(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The value type an option parses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form string.
    Str,
    /// Boolean; anything other than (case-insensitive) `true` reads as false.
    Bool,
    /// Unsigned integer.
    UInt,
    /// Raw JavaScript, carried through unquoted.
    Js,
    /// One token out of a closed set; parse failure enumerates the set.
    Token(&'static [&'static str]),
    /// Comma-separated [`SortDirection`] list; atomic, a single bad token
    /// rejects the whole value.
    SortDirectionList,
}

/// A typed option value, produced by parsing a staged raw string.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    UInt(u64),
    Js(JsSnippet),
    SortDirections(Vec<SortDirection>),
}

impl OptionValue {
    /// The string content, for `Str` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, for `Bool` values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer content, for `UInt` values.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            OptionValue::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// The snippet content, for `Js` values.
    pub fn as_js(&self) -> Option<&JsSnippet> {
        match self {
            OptionValue::Js(js) => Some(js),
            _ => None,
        }
    }

    /// The direction list, for `SortDirections` values.
    pub fn as_sort_directions(&self) -> Option<&[SortDirection]> {
        match self {
            OptionValue::SortDirections(dirs) => Some(dirs),
            _ => None,
        }
    }
}

/// A const-constructible default value for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    None,
    Bool(bool),
    UInt(u64),
    Str(&'static str),
}

impl OptionDefault {
    /// Materializes the default as an [`OptionValue`], if one exists.
    pub fn to_value(&self) -> Option<OptionValue> {
        match self {
            OptionDefault::None => None,
            OptionDefault::Bool(b) => Some(OptionValue::Bool(*b)),
            OptionDefault::UInt(n) => Some(OptionValue::UInt(*n)),
            OptionDefault::Str(s) => Some(OptionValue::Str((*s).to_string())),
        }
    }
}

/// A configuration option descriptor.
///
/// Options are `&'static` singletons declared in the registry; identity is
/// the (key, scope) pair.
#[derive(Debug)]
pub struct ConfigOption {
    pub(crate) key: &'static str,
    pub(crate) scope: OptionScope,
    pub(crate) kind: ValueKind,
    pub(crate) default: OptionDefault,
    pub(crate) processor: ProcessorId,
}

impl ConfigOption {
    /// The configuration key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The scope the option applies to.
    pub fn scope(&self) -> OptionScope {
        self.scope
    }

    /// The value type this option parses into.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The processor bound to this option.
    pub fn processor(&self) -> ProcessorId {
        self.processor
    }

    /// The documented default value, if any.
    pub fn default_value(&self) -> Option<OptionValue> {
        self.default.to_value()
    }

    /// Parses a raw staged string into this option's typed value.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when the value does not fit the option's
    /// type. For token- and direction-valued options the error enumerates the
    /// legal tokens; a multi-valued direction list is atomic, so one bad
    /// token rejects the entire value.
    pub fn parse(&self, raw: &str) -> Result<OptionValue, ConfigError> {
        match self.kind {
            ValueKind::Str => Ok(OptionValue::Str(raw.trim().to_string())),
            ValueKind::Bool => Ok(OptionValue::Bool(raw.trim().eq_ignore_ascii_case("true"))),
            ValueKind::UInt => raw
                .trim()
                .parse::<u64>()
                .map(OptionValue::UInt)
                .map_err(|_| ConfigError::invalid_value(self.key, raw)),
            ValueKind::Js => Ok(OptionValue::Js(JsSnippet::new(raw.trim()))),
            ValueKind::Token(allowed) => {
                let token = raw.trim();
                allowed
                    .iter()
                    .find(|candidate| candidate.eq_ignore_ascii_case(token))
                    .map(|canonical| OptionValue::Str((*canonical).to_string()))
                    .ok_or_else(|| ConfigError::InvalidValue {
                        option: self.key,
                        value: raw.to_string(),
                        allowed: allowed.to_vec(),
                    })
            }
            ValueKind::SortDirectionList => {
                let mut directions = Vec::new();
                for token in raw.split(',') {
                    match SortDirection::from_token(token) {
                        Some(direction) => directions.push(direction),
                        None => {
                            return Err(ConfigError::InvalidValue {
                                option: self.key,
                                value: token.trim().to_string(),
                                allowed: SortDirection::TOKENS.to_vec(),
                            })
                        }
                    }
                }
                Ok(OptionValue::SortDirections(directions))
            }
        }
    }
}

impl PartialEq for ConfigOption {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.scope == other.scope
    }
}

impl Eq for ConfigOption {}

impl Hash for ConfigOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.scope.hash(state);
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.scope)
    }
}
