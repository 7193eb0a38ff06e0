//! # json-core
//!
//! Strict RFC 8259 JSON parser producing a closed, strongly-typed value tree.
//!
//! Parsing is a single recursive-descent pass over a borrowed `&str` with an
//! explicit byte cursor. The result is either a fully built [`Value`] or one
//! [`ParseError`] carrying the failing rule and its line/column; partial trees
//! are never returned.
//!
//! ## Quick start
//!
//! ```rust
//! use json_core::{parse, ErrorKind, Value};
//!
//! let value = parse(r#"{"name": "John", "age": 30}"#).unwrap();
//! assert_eq!(value.get("name"), Some(&Value::from("John")));
//! assert_eq!(value.get("age"), Some(&Value::Number(30.0)));
//!
//! let err = parse("[1, 2, 3,]").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::TrailingComma);
//! assert_eq!(err.to_string(), "trailing comma before closing bracket at line 1, column 10");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value` enum and `Map` container
//! - [`parser`] — `parse` / `parse_with` entry points and container rules
//! - [`options`] — `ParseOptions` (nesting limit, control character policy)
//! - [`error`] — `ParseError` and `ErrorKind`

pub mod error;
mod number;
pub mod options;
pub mod parser;
mod string;
pub mod value;

pub use error::{ErrorKind, ParseError, Result};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use parser::{parse, parse_with};
pub use value::{Map, Value};
