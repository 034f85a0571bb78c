//! Parsed method signature records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownModifier;

/// Java-style access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

impl AccessModifier {
    /// The source keyword for this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
        }
    }
}

impl FromStr for AccessModifier {
    type Err = UnknownModifier;

    /// Matches the keyword exactly; `Public` or ` public` are not modifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessModifier::Public),
            "private" => Ok(AccessModifier::Private),
            "protected" => Ok(AccessModifier::Protected),
            other => Err(UnknownModifier(other.to_string())),
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(type, name)` pair from a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    ty: String,
    name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// The declared type (e.g., "String").
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// The structured form of one parsed signature string.
///
/// Built once per parse and never mutated afterwards; fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// The input exactly as given to the parser.
    raw_signature: String,
    access_modifier: Option<AccessModifier>,
    return_type: String,
    method_name: String,
    /// Arguments in order of appearance. Duplicate names are allowed.
    arguments: Vec<Argument>,
}

impl MethodSignature {
    pub(crate) fn new(
        raw_signature: impl Into<String>,
        access_modifier: Option<AccessModifier>,
        return_type: impl Into<String>,
        method_name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            raw_signature: raw_signature.into(),
            access_modifier,
            return_type: return_type.into(),
            method_name: method_name.into(),
            arguments,
        }
    }

    pub fn raw_signature(&self) -> &str {
        &self.raw_signature
    }

    pub fn access_modifier(&self) -> Option<AccessModifier> {
        self.access_modifier
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

impl fmt::Display for MethodSignature {
    /// Renders the canonical single-spaced form, e.g.
    /// `private void log(String value, int level)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = self.access_modifier {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}
