//! Error types for the parser and sequence engine.
//!
//! A single `thiserror`-derived enum covers every failure kind the core can
//! raise. The core never partially produces an AST or partially enumerates:
//! every fallible operation either returns a complete result or one of
//! these variants.

use crate::base::Span;
use thiserror::Error;

/// Errors raised by [`crate::parse`], [`crate::compile`], and
/// [`crate::Generator::at`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XegerError {
    /// The driver encountered a state absent from the transition table.
    ///
    /// This indicates a malformed table, not malformed user input.
    #[error("unknown state {state:?}")]
    UnknownState { state: String },

    /// The driver saw a character with no matching branch in the current
    /// state's entries (including no wildcard fallback).
    #[error("no transition from state {state:?} on {character:?} at {span:?}")]
    NoTransition {
        state: String,
        character: char,
        span: Span,
    },

    /// The driver entered the `ERR` trap state on user input.
    #[error("syntax error at {span:?}: unexpected {character:?}")]
    SyntaxError { character: Option<char>, span: Span },

    /// The driver reached end of input in a state other than `EOF`.
    #[error("unterminated parse, ended in state {state:?}")]
    UnterminatedParse { state: String },

    /// The builder reached `EOF` with a non-empty scope stack.
    #[error("unclosed scope, {depth} group(s) still open")]
    UnclosedScope { depth: usize },

    /// A `)` was seen with no matching `(`.
    #[error("unmatched ')' at {span:?}")]
    ScopeUnderflow { span: Span },

    /// `Generator::at(i)` was called with `i >= len()`.
    #[error("index {index} out of range, length is {len}")]
    OutOfRange { index: String, len: String },

    /// A cardinality exceeded the configured
    /// [`crate::EnumerationLimits::max_cardinality`].
    #[error("cardinality {cardinality} exceeds configured limit {limit}")]
    CardinalityOverflow { cardinality: String, limit: String },

    /// A `{...}` repeat count's digits don't fit in a `u64`.
    #[error("repeat count {digits:?} at {span:?} does not fit in u64")]
    RepeatCountOverflow { digits: String, span: Span },
}
