//! The transition table: a static `state × character -> state` map.
//!
//! This is data, not control flow. Adding a construct to the grammar means
//! adding rows here and a matching command in [`crate::builder`], never
//! branching on the input text directly. States are plain `&'static str`
//! names rather than an enum so the table can be authored as flat data and
//! so [`crate::builder`] can dispatch on the same names without a parallel
//! enum to keep in sync.

/// How a table entry decides whether it admits an incoming character.
///
/// `c = None` stands for the empty sentinel emitted at beginning and end of
/// input (spec.md's `c=""`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSpec {
    /// Matches any character, including the sentinel. Always the last entry
    /// tried in a state's row (first-match-wins ordering).
    Wildcard,
    /// Matches one of a fixed set of literal characters.
    Set(&'static str),
    /// Matches only the empty sentinel.
    Empty,
}

impl MatchSpec {
    fn admits(self, c: Option<char>) -> bool {
        match (self, c) {
            (MatchSpec::Wildcard, _) => true,
            (MatchSpec::Empty, None) => true,
            (MatchSpec::Empty, Some(_)) => false,
            (MatchSpec::Set(set), Some(ch)) => set.contains(ch),
            (MatchSpec::Set(_), None) => false,
        }
    }
}

/// One row of a state's transition list: "if the character matches `spec`,
/// go to `next`".
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub spec: MatchSpec,
    pub next: &'static str,
}

const fn e(spec: MatchSpec, next: &'static str) -> Entry {
    Entry { spec, next }
}

const DIGITS: &str = "0123456789";

/// Shared by every state where the parser is reading ordinary regex body:
/// start of expression, after a literal, after a group closes, after `|`,
/// after `]`, after a quantifier. Only the *command* fired on entry differs
/// between these states; what they accept next is identical, so they share
/// one row.
static REGEX_BODY: &[Entry] = &[
    e(MatchSpec::Empty, "EOF"),
    e(MatchSpec::Set("\\"), "regex_escape"),
    e(MatchSpec::Set("["), "list_start"),
    e(MatchSpec::Set("("), "regex_start"),
    e(MatchSpec::Set(")"), "regex_next_regex"),
    e(MatchSpec::Set("|"), "regex_next_or"),
    e(MatchSpec::Set("{"), "regex_repeat_from_start"),
    e(MatchSpec::Set("?"), "regex_next_repeat"),
    e(MatchSpec::Wildcard, "regex_next"),
];

/// Shared by `list_start` and `list_next`: inside a `[...]`, not immediately
/// after `\` or `-`.
static LIST_BODY: &[Entry] = &[
    e(MatchSpec::Set("\\"), "list_escape"),
    e(MatchSpec::Set("-"), "list_range_next"),
    e(MatchSpec::Set("]"), "regex_next_list"),
    e(MatchSpec::Wildcard, "list_next"),
];

/// After `-` inside a list. `]` closes the list immediately (a trailing `-`
/// is a literal hyphen, not a dangling range); anything else is a range end.
static LIST_RANGE_NEXT: &[Entry] = &[
    e(MatchSpec::Set("]"), "regex_next_list"),
    e(MatchSpec::Wildcard, "list_next"),
];

static ESCAPE_IN_REGEX: &[Entry] = &[e(MatchSpec::Wildcard, "regex_next")];
static ESCAPE_IN_LIST: &[Entry] = &[e(MatchSpec::Wildcard, "list_next")];

static REPEAT_FROM_START: &[Entry] = &[
    e(MatchSpec::Set(DIGITS), "regex_repeat_from_next"),
    e(MatchSpec::Wildcard, "ERR"),
];
static REPEAT_FROM_NEXT: &[Entry] = &[
    e(MatchSpec::Set(DIGITS), "regex_repeat_from_next"),
    e(MatchSpec::Set(","), "regex_repeat_to_start"),
    e(MatchSpec::Set("}"), "regex_next_repeat"),
    e(MatchSpec::Wildcard, "ERR"),
];
static REPEAT_TO_START: &[Entry] = &[
    e(MatchSpec::Set(DIGITS), "regex_repeat_to_next"),
    e(MatchSpec::Wildcard, "ERR"),
];
static REPEAT_TO_NEXT: &[Entry] = &[
    e(MatchSpec::Set(DIGITS), "regex_repeat_to_next"),
    e(MatchSpec::Set("}"), "regex_next_repeat"),
    e(MatchSpec::Wildcard, "ERR"),
];

static BOF_BODY: &[Entry] = &[e(MatchSpec::Empty, "regex_start")];
static ERR_BODY: &[Entry] = &[e(MatchSpec::Wildcard, "ERR")];

/// The full table: state name to its ordered entry list.
static TABLE: &[(&str, &[Entry])] = &[
    ("BOF", BOF_BODY),
    ("regex_start", REGEX_BODY),
    ("regex_next", REGEX_BODY),
    ("regex_next_regex", REGEX_BODY),
    ("regex_next_or", REGEX_BODY),
    ("regex_next_list", REGEX_BODY),
    ("regex_next_repeat", REGEX_BODY),
    ("regex_escape", ESCAPE_IN_REGEX),
    ("list_start", LIST_BODY),
    ("list_next", LIST_BODY),
    ("list_escape", ESCAPE_IN_LIST),
    ("list_range_next", LIST_RANGE_NEXT),
    ("regex_repeat_from_start", REPEAT_FROM_START),
    ("regex_repeat_from_next", REPEAT_FROM_NEXT),
    ("regex_repeat_to_start", REPEAT_TO_START),
    ("regex_repeat_to_next", REPEAT_TO_NEXT),
    ("ERR", ERR_BODY),
];

/// Why [`apply`] could not produce a next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// `state` has no row in the table at all.
    UnknownState,
    /// `state` has a row, but no entry admits the character.
    NoTransition,
}

fn entries_for(state: &str) -> Option<&'static [Entry]> {
    TABLE.iter().find(|(s, _)| *s == state).map(|(_, entries)| *entries)
}

/// Look up the next state for `state` on input `c`, trying entries in
/// declaration order and returning the first admitting match.
pub fn apply(state: &str, c: Option<char>) -> Result<&'static str, LookupFailure> {
    let entries = entries_for(state).ok_or(LookupFailure::UnknownState)?;
    entries
        .iter()
        .find(|entry| entry.spec.admits(c))
        .map(|entry| entry.next)
        .ok_or(LookupFailure::NoTransition)
}
