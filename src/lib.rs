//! `xeger`: a table-driven parser for a small regex dialect, paired with a
//! ranking/unranking engine that exposes the language it describes as an
//! indexed, enumerable sequence.
//!
//! The pipeline has five stages, each its own module, in dependency order:
//!
//! - [`table`]: the static `state × character -> state` transition table
//!   (C1).
//! - [`driver`]: walks the table over input text, emitting transition
//!   events (C2).
//! - [`builder`]: a pushdown automaton that turns those events into an
//!   [`Ast`] (C3).
//! - [`compact`]: normalizes the raw `Ast` (literal fusion, `or`
//!   flattening, scope elision) (C4).
//! - [`sequence`]: treats the compacted `Ast` as a mixed-radix numeral
//!   system to rank/unrank matches in `O(depth)` (C5).
//!
//! [`parse`] runs the first three stages and returns the compacted `Ast`;
//! [`compile`]/[`compile_with_limits`] wrap it in a [`Generator`].

mod ast;
mod base;
mod builder;
mod compact;
mod driver;
mod error;
mod sequence;
mod table;

pub use ast::Ast;
pub use error::XegerError;
pub use sequence::{EnumerationLimits, Generator};

pub use num_bigint::BigUint;

use builder::Builder;

/// Parses `regex_text` into a compacted [`Ast`].
///
/// This runs the driver and builder to produce a raw tree, then normalizes
/// it with [`compact::compact`]. The result describes a finite language;
/// nothing here enumerates or counts it yet — that's [`compile`].
pub fn parse(regex_text: &str) -> Result<Ast, XegerError> {
    let mut builder = Builder::new();
    driver::drive(regex_text, &mut builder)?;
    let raw = builder.root.expect("driver reaching EOF guarantees a root was built");
    Ok(compact::compact(raw))
}

/// Compiles an `Ast` into a [`Generator`] with no cardinality cap and
/// duplicate-preserving list semantics (the documented reference
/// behavior). Infallible: with no limit configured, cardinality
/// computation cannot fail.
pub fn compile(ast: Ast) -> Generator {
    compile_with_limits(ast, EnumerationLimits::default())
        .expect("default EnumerationLimits has no cap, so cardinality computation cannot fail")
}

/// Compiles an `Ast` into a [`Generator`], honoring `limits`.
///
/// Fails with [`XegerError::CardinalityOverflow`] if `limits.max_cardinality`
/// is set and the tree's cardinality exceeds it at any point during
/// computation.
pub fn compile_with_limits(ast: Ast, limits: EnumerationLimits) -> Result<Generator, XegerError> {
    let ast = if limits.dedupe_lists { sequence::dedupe_ast(ast) } else { ast };
    let len = sequence::cardinality(&ast, limits.max_cardinality.as_ref())?;
    Ok(Generator::new(ast, len, limits.max_cardinality))
}
