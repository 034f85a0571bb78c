//! Parser for single-line, Java-like method signatures.
//!
//! ```
//! use sigparse::parse_function;
//!
//! let signature = parse_function("Vector3 distort(int x, int y, float magnitude)").unwrap();
//! assert_eq!(signature.access_modifier(), None);
//! assert_eq!(signature.method_name(), "distort");
//! assert_eq!(signature.arguments().len(), 3);
//! ```

mod error;
pub mod settings;
mod signature;
mod split;

pub use error::{Component, SettingsError, SignatureError, UnknownModifier};
pub use settings::{discover_settings, load_settings, Settings, WhitespaceMode};
pub use signature::{
    parse_function, trim_until, AccessModifier, Argument, MethodParser, MethodSignature,
};
pub use split::split_by_delimiters;
