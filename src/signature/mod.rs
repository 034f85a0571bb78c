//! Method signature parsing.
//!
//! This module provides:
//! - `MethodSignature`, `Argument` and `AccessModifier`, the parsed record types
//! - `MethodParser`, the configurable positional parser

mod model;
mod parser;

pub use model::{AccessModifier, Argument, MethodSignature};
pub use parser::{parse_function, trim_until, MethodParser};
