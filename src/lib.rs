//! A simplified regular-expression engine: compile a pattern once, match
//! many strings against it without backtracking.
//!
//! The pattern language is restricted to lowercase ASCII literals,
//! alternation, grouping, and zero-or-more repetition:
//!
//! ```text
//! Pattern : Group *
//! Group   : '(' * Literal ( '*' ? ) ( '|' Literal ( '*' ? ) ) * ')' ? ( '*' ? )
//! Literal : [a-z] +
//! ```
//!
//! Grouping is flat: runs of consecutive `(` collapse into a single group
//! boundary, so nested parentheses do not form nested sub-groups. Matching
//! is greedy and never backtracks, so a pattern can fail on strings a
//! conventional regex engine would accept (see [`Pattern::matches`]).
//!
//! ```
//! use sre::Pattern;
//!
//! let pattern = Pattern::compile("a(b*|c)d")?;
//! assert!(pattern.matches("abbbd"));
//! assert!(!pattern.matches("abcd"));
//! # Ok::<(), sre::Error>(())
//! ```

pub mod compile;
mod matcher;
pub mod pattern;

pub use compile::Error;
pub use pattern::Pattern;
