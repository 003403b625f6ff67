//! Interpreters turning the characters of a pattern into tokens, one per
//! grammar context.
//!
//! Each interpreter reads from a shared [CharSource](crate::source::CharSource)
//! and yields `Ok(None)` once it has nothing left to read in its context.

mod brace;
mod bracket;
mod character;
mod expression;

pub use brace::BraceInterpreter;
pub use bracket::BracketInterpreter;
pub use character::CharacterInterpreter;
pub use expression::ExpressionInterpreter;
