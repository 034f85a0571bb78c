//! Positional parser for single-line method signatures.
//!
//! The space-separated head of a signature (`[modifier] return_type name(`)
//! is consumed by a three-state machine, one token per step. The parameter
//! list is located independently in the raw string, between the first `(`
//! and the first `)`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Component, SignatureError};
use crate::settings::{Settings, WhitespaceMode};
use crate::split::split_by_delimiters;

use super::model::{AccessModifier, Argument, MethodSignature};

/// Runs of blanks, used by [`WhitespaceMode::Collapse`].
static BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Parses method signature strings into [`MethodSignature`] records.
///
/// ```
/// use sigparse::{AccessModifier, MethodParser};
///
/// let signature = MethodParser::new()
///     .parse_function("private void log(String value)")
///     .unwrap();
/// assert_eq!(signature.access_modifier(), Some(AccessModifier::Private));
/// assert_eq!(signature.return_type(), "void");
/// assert_eq!(signature.method_name(), "log");
/// assert_eq!(signature.arguments()[0].to_string(), "String value");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodParser {
    whitespace: WhitespaceMode,
    strict_arguments: bool,
}

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    ExpectModifierOrType,
    ExpectType(AccessModifier),
    ExpectName(Option<AccessModifier>, &'a str),
}

/// The positional part of a signature.
struct Head<'a> {
    access_modifier: Option<AccessModifier>,
    return_type: &'a str,
    method_name: &'a str,
}

impl MethodParser {
    /// A parser with literal whitespace handling and tolerant arguments.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            whitespace: settings.whitespace(),
            strict_arguments: settings.strict_arguments(),
        }
    }

    pub fn with_whitespace(mut self, whitespace: WhitespaceMode) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Return [`SignatureError::MalformedArgument`] instead of dropping
    /// argument tokens that lack a type or a name.
    pub fn with_strict_arguments(mut self, strict: bool) -> Self {
        self.strict_arguments = strict;
        self
    }

    pub fn whitespace(&self) -> WhitespaceMode {
        self.whitespace
    }

    pub fn strict_arguments(&self) -> bool {
        self.strict_arguments
    }

    /// Parse a signature such as `public int sum(int a, int b)`.
    ///
    /// Fails with [`SignatureError::MalformedSignature`] when there are too
    /// few tokens for a return type and a method name. Everything else is
    /// best effort: a name token without `(` is used whole, and argument
    /// tokens without both a type and a name are dropped (unless strict).
    pub fn parse_function(&self, signature: &str) -> Result<MethodSignature, SignatureError> {
        let tokens = self.tokenize(signature);
        let head = parse_head(signature, &tokens)?;
        let arguments = self.parse_arguments(signature, argument_list(signature))?;

        trace!(
            method = head.method_name,
            arguments = arguments.len(),
            "parsed signature"
        );

        Ok(MethodSignature::new(
            signature,
            head.access_modifier,
            head.return_type,
            head.method_name,
            arguments,
        ))
    }

    fn tokenize<'a>(&self, signature: &'a str) -> Vec<&'a str> {
        match self.whitespace {
            WhitespaceMode::Literal => {
                let mut tokens: Vec<&str> = signature.split(' ').collect();
                while tokens.last().is_some_and(|t| t.is_empty()) {
                    tokens.pop();
                }
                tokens
            }
            WhitespaceMode::Collapse => {
                let trimmed = signature.trim_matches([' ', '\t']);
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    BLANKS.split(trimmed).collect()
                }
            }
        }
    }

    /// Words of one argument token; empty pieces never occur.
    fn argument_words<'a>(&self, token: &'a str) -> Vec<&'a str> {
        match self.whitespace {
            WhitespaceMode::Literal => split_by_delimiters(token, [" "]),
            WhitespaceMode::Collapse => BLANKS.split(token).filter(|w| !w.is_empty()).collect(),
        }
    }

    fn parse_arguments(
        &self,
        signature: &str,
        list: &str,
    ) -> Result<Vec<Argument>, SignatureError> {
        let mut arguments = Vec::new();
        if list.is_empty() {
            return Ok(arguments);
        }

        for token in split_by_delimiters(list, [","]) {
            let token = token.trim();
            match self.argument_words(token).as_slice() {
                [ty, name, ..] => arguments.push(Argument::new(*ty, *name)),
                _ if self.strict_arguments => {
                    return Err(SignatureError::MalformedArgument {
                        signature: signature.to_string(),
                        token: token.to_string(),
                    });
                }
                _ => debug!(token, signature, "dropping argument without type and name"),
            }
        }

        Ok(arguments)
    }
}

/// Parse `signature` with a default [`MethodParser`].
pub fn parse_function(signature: &str) -> Result<MethodSignature, SignatureError> {
    MethodParser::new().parse_function(signature)
}

/// Return the part of `s` before the first `ch`, or all of `s` if `ch` is absent.
pub fn trim_until(s: &str, ch: char) -> &str {
    match s.find(ch) {
        Some(index) => &s[..index],
        None => s,
    }
}

fn parse_head<'a>(signature: &str, tokens: &[&'a str]) -> Result<Head<'a>, SignatureError> {
    // A lone token is never a modifier: it has to be the return type.
    let can_have_modifier = tokens.len() > 1;
    let mut state = State::ExpectModifierOrType;

    for &token in tokens {
        state = match state {
            State::ExpectModifierOrType => match token.parse::<AccessModifier>() {
                Ok(modifier) if can_have_modifier => State::ExpectType(modifier),
                _ => State::ExpectName(None, token),
            },
            State::ExpectType(modifier) => State::ExpectName(Some(modifier), token),
            State::ExpectName(access_modifier, return_type) => {
                return Ok(Head {
                    access_modifier,
                    return_type,
                    method_name: trim_until(token, '('),
                });
            }
        };
    }

    let missing = match state {
        State::ExpectModifierOrType | State::ExpectType(_) => Component::ReturnType,
        State::ExpectName(..) => Component::MethodName,
    };
    Err(SignatureError::MalformedSignature {
        signature: signature.to_string(),
        missing,
    })
}

/// The trimmed text between the first `(` and the first `)`, or "" when
/// either is missing or they are out of order.
fn argument_list(signature: &str) -> &str {
    match (signature.find('('), signature.find(')')) {
        (Some(open), Some(close)) if close > open => signature[open + 1..close].trim(),
        _ => "",
    }
}
