//! # Link Extraction
//!
//! Finds `[[name]]` and `[[name|display]]` occurrences in raw text.
//!
//! The scanner is an explicit state machine over a byte [`Cursor`]:
//!
//! - **`Scanning`**: looking for `[[`
//! - **`InName`**: reading the name up to `|` or `]`
//! - **`InDisplay`**: reading the display text up to `]`
//!
//! A `]` always ends the current section. If it is not immediately followed
//! by a second `]` the attempt fails and scanning resumes one byte after the
//! opening `[[`. There is no bracket counting: `[[a[[b]]c]]` yields the single
//! link `[[a[[b]]` named `a[[b`.

pub mod cursor;
pub mod syntax;

use crate::models::{LinkOccurrence, Span};
use cursor::Cursor;
use syntax::WikiLink;

#[derive(Debug, Clone, Copy)]
enum State {
    Scanning,
    InName {
        start: usize,
        name_start: usize,
    },
    InDisplay {
        start: usize,
        name: Span,
        display_start: usize,
    },
}

/// Lazy iterator over the links of one text. Created by [`extract_links`].
#[derive(Clone)]
pub struct LinkIter<'a> {
    cur: Cursor<'a>,
}

/// Scans `text` for wiki links, left to right.
///
/// Each call starts from offset zero, so scanning the same text twice yields
/// the same occurrences.
pub fn extract_links(text: &str) -> LinkIter<'_> {
    LinkIter {
        cur: Cursor::new(text),
    }
}

/// Collects every link in `text`.
pub fn extract_links_vec(text: &str) -> Vec<LinkOccurrence> {
    extract_links(text).collect()
}

impl LinkIter<'_> {
    fn finish(&mut self, start: usize, name: Span, display: Option<Span>) -> LinkOccurrence {
        self.cur.bump_n(WikiLink::CLOSE.len());
        LinkOccurrence {
            raw_name: self.cur.slice(name.start, name.end).trim().to_string(),
            display_text: display.map(|d| self.cur.slice(d.start, d.end).trim().to_string()),
            span: Span {
                start,
                end: self.cur.pos(),
            },
        }
    }
}

impl Iterator for LinkIter<'_> {
    type Item = LinkOccurrence;

    fn next(&mut self) -> Option<LinkOccurrence> {
        let mut state = State::Scanning;

        loop {
            state = match state {
                State::Scanning => {
                    if self.cur.eof() {
                        return None;
                    }
                    if self.cur.starts_with(WikiLink::OPEN) {
                        let start = self.cur.pos();
                        self.cur.bump_n(WikiLink::OPEN.len());
                        State::InName {
                            start,
                            name_start: self.cur.pos(),
                        }
                    } else {
                        self.cur.bump();
                        State::Scanning
                    }
                }
                State::InName { start, name_start } => match self.cur.peek() {
                    // No `]` left anywhere, so no later `[[` can close either.
                    None => return None,
                    Some(WikiLink::ALIAS) => {
                        let name = Span {
                            start: name_start,
                            end: self.cur.pos(),
                        };
                        self.cur.bump();
                        State::InDisplay {
                            start,
                            name,
                            display_start: self.cur.pos(),
                        }
                    }
                    Some(WikiLink::CLOSE_BYTE) => {
                        if self.cur.starts_with(WikiLink::CLOSE) {
                            let name = Span {
                                start: name_start,
                                end: self.cur.pos(),
                            };
                            return Some(self.finish(start, name, None));
                        }
                        self.cur.reset_to(start + 1);
                        State::Scanning
                    }
                    Some(_) => {
                        self.cur.bump();
                        state
                    }
                },
                State::InDisplay {
                    start,
                    name,
                    display_start,
                } => match self.cur.peek() {
                    None => return None,
                    Some(WikiLink::CLOSE_BYTE) => {
                        if self.cur.starts_with(WikiLink::CLOSE) {
                            let display = Span {
                                start: display_start,
                                end: self.cur.pos(),
                            };
                            return Some(self.finish(start, name, Some(display)));
                        }
                        self.cur.reset_to(start + 1);
                        State::Scanning
                    }
                    Some(_) => {
                        self.cur.bump();
                        state
                    }
                },
            };
        }
    }
}
