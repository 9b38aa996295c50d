//! The builder: a pushdown automaton that turns the driver's transition
//! stream into an [`Ast`].
//!
//! Every state name the table can produce is either dispatched to a named
//! command below, or falls through to the generic "any other new_state"
//! bucket, which decides what to do purely by inspecting `old_state`. This
//! mirrors the table being the only place that knows about input
//! characters: the builder never looks at raw text, only at state names
//! and the one character that caused the current transition.

use std::mem;

use tracing::trace;

use crate::ast::Ast;
use crate::base::{self, Span};
use crate::error::XegerError;

fn point(text: &str, offset: usize) -> Span {
    let p = base::Position::from_offset(text, offset);
    Span::new(p, p)
}

fn named_class(c: char) -> Option<&'static str> {
    match c {
        'd' => Some("0123456789"),
        'l' => Some("abcdefghijklmnopqrstuvwxyz"),
        'L' => Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        _ => None,
    }
}

/// Accumulates parser state across the whole driver run and produces the
/// final [`Ast`] once the driver reaches `EOF`.
#[derive(Debug, Default)]
pub struct Builder {
    /// Children of the scope currently being assembled.
    current: Vec<Ast>,
    /// Completed alternatives of an `or` in progress. `None` means we are
    /// not inside an alternation at the current nesting level.
    pending_or: Option<Vec<Ast>>,
    /// Characters accumulated since the last flush.
    char_accum: String,
    /// `None` outside a `{...}` construct. `Some(vec)` from the moment `{`
    /// is seen; holds `[m]` once a `,` has been read, empty otherwise.
    repeat_accum: Option<Vec<u64>>,
    /// Saved `(current, pending_or)` pairs for enclosing scopes, pushed on
    /// `(` and popped on `)`.
    scope_stack: Vec<(Vec<Ast>, Option<Vec<Ast>>)>,
    /// The finished root, set by the `EOF` command.
    pub(crate) root: Option<Ast>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.char_accum.is_empty() {
            self.current.push(Ast::Literal(mem::take(&mut self.char_accum)));
        }
    }

    /// Splits off the last character of `char_accum` as its own literal
    /// child, so a following quantifier wraps only that one character. If
    /// more than one character is pending, the rest is emitted as a
    /// separate literal first; if at most one character is pending, this
    /// is just a flush.
    fn store_last_character(&mut self) {
        if self.char_accum.is_empty() {
            return;
        }
        let mut chars: Vec<char> = self.char_accum.chars().collect();
        let last = chars.pop().expect("checked non-empty above");
        if !chars.is_empty() {
            let prefix: String = chars.into_iter().collect();
            self.current.push(Ast::Literal(prefix));
        }
        self.current.push(Ast::Literal(last.to_string()));
        self.char_accum.clear();
    }

    /// Builds the node representing everything accumulated at the current
    /// nesting level (folding in `pending_or` if one is open) and resets
    /// `current`/`pending_or` for whatever comes next.
    fn finish_level(&mut self) -> Ast {
        match self.pending_or.take() {
            Some(mut alts) => {
                alts.push(Ast::Scope(mem::take(&mut self.current)));
                Ast::Or(alts)
            }
            None => Ast::Scope(mem::take(&mut self.current)),
        }
    }

    fn on_eof(&mut self, text: &str, offset: usize) -> Result<(), XegerError> {
        if !self.scope_stack.is_empty() {
            return Err(XegerError::UnclosedScope {
                depth: self.scope_stack.len(),
            });
        }
        let _ = (text, offset);
        self.flush();
        self.root = Some(self.finish_level());
        Ok(())
    }

    fn on_regex_start(&mut self, old_state: &str) {
        if old_state != "BOF" {
            self.flush();
            let saved_current = mem::take(&mut self.current);
            let saved_or = self.pending_or.take();
            self.scope_stack.push((saved_current, saved_or));
            trace!(depth = self.scope_stack.len(), "scope push");
        }
    }

    fn on_close_paren(&mut self, text: &str, offset: usize) -> Result<(), XegerError> {
        self.flush();
        let Some((parent_current, parent_or)) = self.scope_stack.pop() else {
            return Err(XegerError::ScopeUnderflow {
                span: point(text, offset),
            });
        };
        trace!(depth = self.scope_stack.len(), "scope pop");
        let finished = self.finish_level();
        self.current = parent_current;
        self.pending_or = parent_or;
        self.current.push(finished);
        Ok(())
    }

    fn on_or(&mut self) {
        self.flush();
        let alt = Ast::Scope(mem::take(&mut self.current));
        self.pending_or.get_or_insert_with(Vec::new).push(alt);
    }

    fn on_close_list(&mut self, old_state: &str) {
        if old_state == "list_range_next" {
            // A trailing `-` right before `]` is a literal hyphen, not an
            // unresolved range.
            self.char_accum.push('-');
        }
        self.current.push(Ast::List(mem::take(&mut self.char_accum)));
    }

    fn on_repeat_from_start(&mut self) {
        self.store_last_character();
        self.repeat_accum = Some(Vec::new());
    }

    fn parse_repeat_count(&mut self, text: &str, offset: usize) -> Result<u64, XegerError> {
        let digits = mem::take(&mut self.char_accum);
        match digits.parse() {
            Ok(n) => Ok(n),
            Err(_) => Err(XegerError::RepeatCountOverflow {
                digits,
                span: point(text, offset),
            }),
        }
    }

    fn on_repeat_to_start(&mut self, text: &str, offset: usize) -> Result<(), XegerError> {
        let m = self.parse_repeat_count(text, offset)?;
        self.repeat_accum.get_or_insert_with(Vec::new).push(m);
        Ok(())
    }

    fn on_next_repeat(&mut self, text: &str, offset: usize) -> Result<(), XegerError> {
        match self.repeat_accum.take() {
            None => {
                // Plain `?`: implicit repeat(0, 1) of the last child.
                self.store_last_character();
                if let Some(last) = self.current.pop() {
                    self.current.push(Ast::Repeat(0, 1, Box::new(last)));
                }
            }
            Some(accum) => {
                let n = self.parse_repeat_count(text, offset)?;
                let min = accum.first().copied().unwrap_or(n);
                if let Some(last) = self.current.pop() {
                    self.current.push(Ast::Repeat(min, n, Box::new(last)));
                }
            }
        }
        Ok(())
    }

    /// Range expansion, named-class expansion, and plain accumulation for
    /// every state not dispatched above, chosen by what `old_state` was.
    fn on_default(&mut self, old_state: &str, c: char) {
        match old_state {
            "list_range_next" => match self.char_accum.pop() {
                Some(start) if start <= c => {
                    for code in (start as u32)..=(c as u32) {
                        if let Some(ch) = char::from_u32(code) {
                            self.char_accum.push(ch);
                        }
                    }
                }
                Some(start) => {
                    self.char_accum.push(start);
                    self.char_accum.push('-');
                    self.char_accum.push(c);
                }
                None => {
                    self.char_accum.push('-');
                    self.char_accum.push(c);
                }
            },
            "list_escape" => match named_class(c) {
                Some(expansion) => self.char_accum.push_str(expansion),
                None => self.char_accum.push(c),
            },
            "regex_escape" => match named_class(c) {
                Some(expansion) => {
                    self.flush();
                    self.current.push(Ast::List(expansion.to_string()));
                }
                None => self.char_accum.push(c),
            },
            _ => self.char_accum.push(c),
        }
    }

    /// Dispatches one transition event from the driver.
    pub fn on_event(
        &mut self,
        old_state: &str,
        new_state: &str,
        c: Option<char>,
        text: &str,
        offset: usize,
    ) -> Result<(), XegerError> {
        trace!(old_state, new_state, ?c, "builder dispatch");
        match new_state {
            "ERR" => Err(XegerError::SyntaxError {
                character: c,
                span: point(text, offset),
            }),
            "EOF" => self.on_eof(text, offset),
            "regex_start" => {
                self.on_regex_start(old_state);
                Ok(())
            }
            "regex_next_regex" => self.on_close_paren(text, offset),
            "regex_repeat_from_start" => {
                self.on_repeat_from_start();
                Ok(())
            }
            "regex_repeat_to_start" => self.on_repeat_to_start(text, offset),
            "regex_next_repeat" => self.on_next_repeat(text, offset),
            "list_start" => {
                self.flush();
                Ok(())
            }
            "regex_next_list" => {
                self.on_close_list(old_state);
                Ok(())
            }
            "regex_next_or" => {
                self.on_or();
                Ok(())
            }
            "list_escape" | "regex_escape" | "list_range_next" => Ok(()),
            _ => {
                if let Some(c) = c {
                    self.on_default(old_state, c);
                }
                Ok(())
            }
        }
    }
}
