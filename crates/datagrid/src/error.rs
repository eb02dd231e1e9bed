//! Error types for the configuration pipeline.
//!
//! All fatal pipeline failures surface as [`ConfigError`]. A fatal error
//! aborts the whole render pass for the affected table: configuration errors
//! are deterministic functions of the input, so there is no retry path.
//!
//! Non-fatal conditions (a message-resolver provider that cannot be
//! constructed) are not errors at all; they are logged and recorded as
//! diagnostics on the table configuration.

use crate::option::OptionScope;

/// Errors raised while processing table or column configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A staged key has no registered option for its scope.
    #[error("unknown {scope} option \"{key}\"")]
    UnknownOption { key: String, scope: OptionScope },

    /// A raw value failed to parse against its option's type.
    ///
    /// For enum-valued options, `allowed` carries the full list of legal
    /// tokens so the message can enumerate them.
    #[error("invalid value \"{value}\" for option \"{option}\"{}", fmt_allowed(.allowed))]
    InvalidValue {
        option: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// A compound `bundle1,bundle2#function` value is malformed.
    #[error("malformed function reference \"{raw}\": expected \"[bundle[,bundle...]]#functionName\" or a bare function name")]
    MalformedFunction { raw: String },

    /// An extension failed irrecoverably during its setup step.
    #[error("extension \"{extension}\" failed during setup: {message}")]
    ExtensionSetup {
        extension: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Create an [`ConfigError::InvalidValue`] without legal-token listing.
    pub fn invalid_value(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            option,
            value: value.into(),
            allowed: Vec::new(),
        }
    }

    /// Create an [`ConfigError::ExtensionSetup`] error.
    pub fn extension_setup(extension: &'static str, message: impl Into<String>) -> Self {
        Self::ExtensionSetup {
            extension,
            message: message.into(),
        }
    }
}

fn fmt_allowed(allowed: &[&'static str]) -> String {
    if allowed.is_empty() {
        String::new()
    } else {
        format!(" (legal values: {})", allowed.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_lists_legal_tokens() {
        let err = ConfigError::InvalidValue {
            option: "sortDirection",
            value: "UP".to_string(),
            allowed: vec!["ASC", "DESC"],
        };
        let msg = err.to_string();
        assert!(msg.contains("UP"));
        assert!(msg.contains("ASC, DESC"));
    }

    #[test]
    fn invalid_value_without_tokens_has_no_listing() {
        let err = ConfigError::invalid_value("pipeSize", "abc");
        assert!(!err.to_string().contains("legal values"));
    }

    #[test]
    fn unknown_option_names_scope() {
        let err = ConfigError::UnknownOption {
            key: "bogus".to_string(),
            scope: OptionScope::Column,
        };
        assert!(err.to_string().contains("column"));
        assert!(err.to_string().contains("bogus"));
    }
}
