//! Truncate text to a number of sentences.
//!
//! Two variants are provided:
//!
//! * [`truncate_plain`] keeps the first N sentences of plain text.
//! * [`truncate_html`] does the same for an HTML fragment, copying markup
//!   verbatim and closing every tag that is still open where the text was cut.
//!
//! ```
//! use sentrunc::truncate_html;
//!
//! let html = "<ul><li>First.</li><li>Second! Third?</li></ul>";
//! assert_eq!(
//!     truncate_html(html, 2),
//!     "<ul><li>First.</li><li>Second!</li></ul>"
//! );
//! ```
//!
//! Neither function fails: malformed markup and invalid UTF-8 are tolerated,
//! and a count of zero or less returns an empty string.

mod count;
mod error;
pub mod html;
mod plain;
pub mod runes;
pub mod sentence;

pub use count::parse_count;
pub use error::CountError;
pub use html::{truncate_html, truncate_html_bytes, TagStack};
pub use plain::truncate_plain;

/// Which truncator to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Plain,
    Html,
}

/// Truncate raw input bytes with the truncator for `mode`.
///
/// Plain text is decoded lossily first; HTML is decoded rune by rune and
/// undecodable bytes are dropped.
pub fn truncate(mode: Mode, input: &[u8], sentence_count: i64) -> String {
    match mode {
        Mode::Plain => truncate_plain(&String::from_utf8_lossy(input), sentence_count),
        Mode::Html => truncate_html_bytes(input, sentence_count),
    }
}
