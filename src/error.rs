//! Error types for signature parsing and settings loading.

use std::fmt;

use thiserror::Error;

/// A mandatory positional component of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    ReturnType,
    MethodName,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::ReturnType => f.write_str("return type"),
            Component::MethodName => f.write_str("method name"),
        }
    }
}

/// Errors raised by [`MethodParser::parse_function`](crate::MethodParser::parse_function).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The input ran out of space-separated tokens before a mandatory component.
    #[error("malformed signature '{signature}': missing {missing}")]
    MalformedSignature {
        signature: String,
        missing: Component,
    },

    /// An argument token without both a type and a name. Only raised in strict mode.
    #[error("malformed argument '{token}' in signature '{signature}'")]
    MalformedArgument { signature: String, token: String },
}

/// A keyword that is not `public`, `private` or `protected`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown access modifier '{0}'")]
pub struct UnknownModifier(pub String);

/// Errors raised while reading a `sigparse.toml` file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Toml(#[from] toml::de::Error),
}
