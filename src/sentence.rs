// src/sentence.rs
//
// Sentence boundaries for text outside markup.
//
// A sentence ends at '.', '!', '?' or '\n'. A '.' directly followed by an ASCII
// digit is part of a number ("4.50") and does not end anything. A fragment only
// counts as a sentence if it contained at least one non-whitespace character
// besides its terminator.

use tracing::trace;

use crate::runes::Runes;

/// How a call to [`classify_span`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanEnd {
    /// A terminator was copied; the cursor sits right after it.
    Terminal,
    /// The next rune is '<'. It was left unconsumed.
    Markup,
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub end: SpanEnd,
    /// True only for a terminated fragment that held a word character.
    pub counted: bool,
}

#[inline]
pub fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n')
}

/// Whether `c` closes a sentence given the rune that follows it.
#[inline]
pub fn ends_sentence(c: char, next: Option<char>) -> bool {
    match c {
        '.' => !next.is_some_and(|n| n.is_ascii_digit()),
        _ => is_terminator(c),
    }
}

/// Copy runes from `runes` into `out` until a sentence terminator, the start
/// of a tag, or end of input.
pub fn classify_span(runes: &mut Runes<'_>, out: &mut String) -> Span {
    let mut word = false;

    while let Some(rune) = runes.peek() {
        if rune.ch == '<' {
            return Span {
                end: SpanEnd::Markup,
                counted: false,
            };
        }
        runes.next();
        out.push(rune.ch);

        if ends_sentence(rune.ch, runes.peek().map(|n| n.ch)) {
            if word {
                trace!(offset = rune.offset, "sentence boundary");
            }
            return Span {
                end: SpanEnd::Terminal,
                counted: word,
            };
        }
        if !rune.ch.is_whitespace() {
            word = true;
        }
    }

    Span {
        end: SpanEnd::EndOfInput,
        counted: false,
    }
}
