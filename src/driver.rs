//! Drives the transition table over input text, feeding each transition to
//! a [`crate::builder::Builder`].
//!
//! The driver owns no parsing knowledge itself — it only walks characters,
//! calls [`table::apply`], and reports the events. All grammar semantics
//! live in the table's data and the builder's command dispatch.

use tracing::trace;

use crate::base::{self, Span};
use crate::builder::Builder;
use crate::error::XegerError;
use crate::table::{self, LookupFailure};

fn point(text: &str, offset: usize) -> Span {
    let p = base::Position::from_offset(text, offset);
    Span::new(p, p)
}

fn apply_checked(
    text: &str,
    state: &str,
    c: Option<char>,
    offset: usize,
) -> Result<&'static str, XegerError> {
    table::apply(state, c).map_err(|failure| match failure {
        LookupFailure::UnknownState => XegerError::UnknownState {
            state: state.to_string(),
        },
        LookupFailure::NoTransition => XegerError::NoTransition {
            state: state.to_string(),
            character: c.unwrap_or('\u{0}'),
            span: point(text, offset),
        },
    })
}

/// Run the table over `text`, feeding every `(old_state, new_state,
/// character)` transition to `builder`.
///
/// Emits the `BOF` sentinel transition first, then one transition per
/// character, then the `EOF` sentinel transition. The post-condition that
/// the final transition lands on `EOF` is checked here, independent of
/// whatever the builder did with it — an unterminated scope is a builder
/// error (`UnclosedScope`), but a driver ending anywhere other than `EOF`
/// (e.g. mid `[...]` or mid `{...}`) is a driver-level `UnterminatedParse`.
pub fn drive(text: &str, builder: &mut Builder) -> Result<(), XegerError> {
    let mut state = apply_checked(text, "BOF", None, 0)?;
    trace!(new_state = state, "BOF");
    builder.on_event("BOF", state, None, text, 0)?;

    let mut offset = 0usize;
    for ch in text.chars() {
        let next = apply_checked(text, state, Some(ch), offset)?;
        trace!(old_state = state, new_state = next, character = %ch, offset, "transition");
        builder.on_event(state, next, Some(ch), text, offset)?;
        state = next;
        offset += ch.len_utf8();
    }

    let final_state = apply_checked(text, state, None, offset)?;
    trace!(old_state = state, new_state = final_state, "EOF sentinel");
    builder.on_event(state, final_state, None, text, offset)?;

    if final_state != "EOF" {
        return Err(XegerError::UnterminatedParse {
            state: final_state.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drives_a_plain_literal_to_eof() {
        let mut builder = Builder::new();
        drive("abc", &mut builder).unwrap();
        assert!(builder.root.is_some());
    }

    #[test]
    fn unterminated_list_is_reported() {
        let mut builder = Builder::new();
        let err = drive("[abc", &mut builder).unwrap_err();
        assert!(matches!(err, XegerError::UnterminatedParse { .. }));
    }

    #[test]
    fn malformed_repeat_count_is_a_syntax_error() {
        let mut builder = Builder::new();
        let err = drive("a{x}", &mut builder).unwrap_err();
        assert!(matches!(err, XegerError::SyntaxError { .. }));
    }
}
