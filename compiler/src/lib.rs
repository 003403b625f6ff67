//! Provides for the tokenizing and compilation of a regex pattern into a
//! matcher tree evaluated by the `stepre_runtime` crate.
//!
//! A pattern is read in one of several dialects, chosen by [SyntaxFlags].
//! Reading is layered: a [source::CharSource] yields characters, context
//! specific interpreters classify them through markup tables into tokens, a
//! [TokenSource] routes between those interpreters, and finally [compile]
//! descends the token stream into a [stepre_runtime::Matcher].
//!
//! # Example
//!
//! ```rust
//! use stepre_compiler::{create_regex, ErrorKind, SyntaxFlag};
//!
//! // Patterns default to the ECMAScript dialect.
//! let regex = create_regex("colou?r", SyntaxFlag::ECMAScript.into()).unwrap();
//! assert!(regex.is_match("color"));
//! assert!(regex.is_match("colour"));
//!
//! // The same pattern in the basic dialect treats `?` as a literal.
//! let regex = create_regex("colou?r", SyntaxFlag::Basic.into()).unwrap();
//! assert!(regex.is_match("colou?r"));
//!
//! // Compilation failures carry the kind of error and where it was found.
//! let err = create_regex("a{2,1}", SyntaxFlag::Extended.into()).unwrap_err();
//! assert_eq!(ErrorKind::BadBrace, err.kind());
//! ```

pub mod class;
pub mod compiler;
pub mod context;
pub mod error;
pub mod flags;
pub mod interpreter;
pub mod markup;
mod regex;
pub mod source;
pub mod token;
pub mod token_source;

pub use compiler::{compile, MAX_NESTING};
pub use error::{ErrorKind, RegexError};
pub use flags::{Dialect, SyntaxFlag, SyntaxFlags};
pub use regex::{create_regex, Regex};
pub use token::{Token, TokenType};
pub use token_source::{ContextState, TokenSource};
