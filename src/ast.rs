//! The AST the builder produces and the compactor normalizes.
//!
//! Every variant is a finite, enumerable language fragment with a
//! cardinality and a positional (un)ranking rule — see [`crate::sequence`]
//! for how each tag is ranked and unranked.

/// A node in the parsed regex tree.
///
/// `List` and `Range` both describe a single character drawn from a set,
/// but they're kept distinct: `List` holds the set as explicit text (so it
/// can carry duplicates, see the note below), `Range` holds just the two
/// endpoints of a contiguous code-point span. The parser only ever
/// constructs `List` directly (it expands `[a-z]` into the full character
/// string at parse time); `Range` exists as a first-class primitive of the
/// data model and is exercised directly by the sequence engine's tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A fixed string, matched verbatim. Cardinality 1.
    Literal(String),
    /// One character chosen from `s`, in the order given.
    ///
    /// Duplicate characters are preserved rather than deduplicated:
    /// `List("aa".into())` has cardinality 2, and `at(0)` and `at(1)` both
    /// produce `"a"`. This is a deliberate choice (see `EnumerationLimits`
    /// in `sequence`), not an oversight — callers who want set semantics
    /// opt in via `dedupe_lists`.
    List(String),
    /// One character chosen from the contiguous span `start..=end`,
    /// inclusive, by code-point order.
    Range(char, char),
    /// An ordered sequence of children, concatenated.
    Scope(Vec<Ast>),
    /// A choice between alternatives; cardinality is the sum of the
    /// alternatives' cardinalities.
    Or(Vec<Ast>),
    /// `child` repeated some number of times in `min..=max` (inclusive),
    /// concatenated. Cardinality is the sum over `k` in `min..=max` of
    /// `cardinality(child)^k`.
    Repeat(u64, u64, Box<Ast>),
}
