// src/html.rs
//
// Sentence truncation for HTML fragments.
//
// - Single forward pass over the input bytes; text and markup are copied verbatim.
// - Open tags push their name on a stack; close tags remove the most recent entry
//   with the same name, wherever it sits, so badly nested markup still balances.
//   Unmatched close tags are copied and otherwise ignored.
// - Once the sentence budget is reached (or input runs out), every name left on
//   the stack is closed, innermost first.
// - Declarations and comments (`<!...>`, `<?...>`) are copied but never pushed.
// - Invalid UTF-8 is skipped, never reported.

use memchr::memchr;
use tracing::debug;

use crate::runes::Runes;
use crate::sentence::classify_span;

/* ================================ TagStack =============================== */

/// Names of the tags currently open, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStack {
    names: Vec<String>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Remove the most recently pushed `name`. Returns false if it was never open.
    pub fn close(&mut self, name: &str) -> bool {
        match self.names.iter().rposition(|open| open == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Append `</name>` for every open tag, last opened first.
    pub fn close_all(self, out: &mut String) {
        for name in self.names.into_iter().rev() {
            debug!(tag = %name, "closing tag left open at cut point");
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
    }
}

/* ============================== Scan machine ============================= */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ScanningText,
    /// Cursor is just past `<`.
    ScanningTagOpen,
    /// Cursor is just past `</`.
    ScanningTagClose,
    Done,
}

struct Scanner<'a> {
    src: &'a [u8],
    cursor: Runes<'a>,
    stack: TagStack,
    out: String,
    sentences: u64,
    budget: u64,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a [u8], budget: u64) -> Self {
        Self {
            src,
            cursor: Runes::new(src),
            stack: TagStack::new(),
            out: String::with_capacity(src.len() + 64),
            sentences: 0,
            budget,
        }
    }

    fn run(mut self) -> String {
        let mut state = State::ScanningText;
        while state != State::Done {
            state = match state {
                State::ScanningText => self.scan_text(),
                State::ScanningTagOpen => self.scan_open_tag(),
                State::ScanningTagClose => self.scan_close_tag(),
                State::Done => State::Done,
            };
        }
        self.stack.close_all(&mut self.out);
        self.out
    }

    fn scan_text(&mut self) -> State {
        if self.sentences >= self.budget {
            return State::Done;
        }
        let Some(rune) = self.cursor.peek() else {
            return State::Done;
        };

        if rune.ch != '<' {
            if classify_span(&mut self.cursor, &mut self.out).counted {
                self.sentences += 1;
            }
            return State::ScanningText;
        }

        self.cursor.next();
        self.out.push('<');
        match self.cursor.peek() {
            Some(next) if next.ch == '/' => {
                self.cursor.next();
                self.out.push('/');
                State::ScanningTagClose
            }
            Some(_) => State::ScanningTagOpen,
            None => State::Done,
        }
    }

    fn scan_open_tag(&mut self) -> State {
        let body = self.take_tag_body();
        let name = body
            .split(|c: char| c.is_ascii_whitespace())
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        if !name.is_empty() && !name.starts_with(['!', '?']) {
            self.stack.push(name);
        }
        State::ScanningText
    }

    fn scan_close_tag(&mut self) -> State {
        let body = self.take_tag_body();
        let name = body.trim_matches(|c: char| c.is_ascii_whitespace());
        if !self.stack.close(name) {
            debug!(tag = %name, "close tag without matching open tag");
        }
        State::ScanningText
    }

    /// Copy everything up to and including the next `>` and return the text
    /// before it. A tag cut off by end of input still gets its `>`.
    fn take_tag_body(&mut self) -> String {
        let start = self.cursor.offset();
        let rest = &self.src[start..];
        let (end, resume) = match memchr(b'>', rest) {
            Some(i) => (start + i, start + i + 1),
            None => (self.src.len(), self.src.len()),
        };

        let body: String = Runes::new(&self.src[start..end]).map(|r| r.ch).collect();
        self.out.push_str(&body);
        self.out.push('>');
        self.cursor.advance_to(resume);
        body
    }
}

/* ================================ Entry points =========================== */

/// Keep at most `sentence_count` sentences of `markup`, closing every tag still
/// open at the cut. Non-positive counts yield an empty string.
pub fn truncate_html(markup: &str, sentence_count: i64) -> String {
    truncate_html_bytes(markup.as_bytes(), sentence_count)
}

/// Like [`truncate_html`], for input that may not be valid UTF-8.
/// Undecodable bytes are dropped from the output.
pub fn truncate_html_bytes(markup: &[u8], sentence_count: i64) -> String {
    let budget = match u64::try_from(sentence_count) {
        Ok(budget) if budget > 0 => budget,
        _ => return String::new(),
    };
    Scanner::new(markup, budget).run()
}
