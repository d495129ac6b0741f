// src/runes.rs
//
// Lazy UTF-8 decoding over raw bytes.
//
// - Yields (char, byte width, start offset) for every well-formed scalar value.
// - A malformed unit (bad lead byte, truncated sequence, overlong form, surrogate)
//   is skipped one byte at a time; decoding never fails.
// - `Runes` is a cheap `Clone` cursor, so callers peek by cloning.

/// One decoded scalar value and where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rune {
    pub ch: char,
    pub width: usize,
    pub offset: usize,
}

/// Outcome of decoding at a single position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    Rune(char, usize),
    /// Bytes to skip before the next decode attempt.
    Invalid(usize),
}

#[inline]
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the scalar value starting at `at`. Returns `None` at end of input.
pub fn decode_rune(src: &[u8], at: usize) -> Option<Decoded> {
    let rest = src.get(at..)?;
    let &lead = rest.first()?;
    if lead.is_ascii() {
        return Some(Decoded::Rune(char::from(lead), 1));
    }
    let width = sequence_width(lead);
    if width == 0 || rest.len() < width {
        return Some(Decoded::Invalid(1));
    }
    // from_utf8 rejects overlong forms and surrogates for us.
    let decoded = std::str::from_utf8(&rest[..width])
        .ok()
        .and_then(|s| s.chars().next());
    Some(match decoded {
        Some(ch) => Decoded::Rune(ch, width),
        None => Decoded::Invalid(1),
    })
}

/// Forward-only cursor over the scalar values of a byte slice.
#[derive(Clone, Debug)]
pub struct Runes<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Runes<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the next decode attempt.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<Rune> {
        self.clone().next()
    }

    /// Move the cursor to `offset`. The cursor never rewinds.
    pub fn advance_to(&mut self, offset: usize) {
        debug_assert!(offset >= self.pos, "cursor rewind {} -> {}", self.pos, offset);
        self.pos = offset.clamp(self.pos, self.src.len());
    }
}

impl Iterator for Runes<'_> {
    type Item = Rune;

    fn next(&mut self) -> Option<Rune> {
        loop {
            match decode_rune(self.src, self.pos)? {
                Decoded::Rune(ch, width) => {
                    let rune = Rune {
                        ch,
                        width,
                        offset: self.pos,
                    };
                    self.pos += width;
                    return Some(rune);
                }
                Decoded::Invalid(skip) => self.pos += skip,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(src: &[u8]) -> String {
        Runes::new(src).map(|r| r.ch).collect()
    }

    #[test]
    fn decodes_multibyte_with_offsets() {
        let runes: Vec<Rune> = Runes::new("aé🐘".as_bytes()).collect();
        assert_eq!(
            runes,
            vec![
                Rune { ch: 'a', width: 1, offset: 0 },
                Rune { ch: 'é', width: 2, offset: 1 },
                Rune { ch: '🐘', width: 4, offset: 3 },
            ]
        );
    }

    #[test]
    fn skips_invalid_bytes() {
        assert_eq!(chars(b"a\xffb"), "ab");
        // Truncated three-byte sequence followed by ASCII.
        assert_eq!(chars(b"\xe2\x82x"), "x");
        // Overlong encoding of '/'.
        assert_eq!(chars(b"\xc0\xafok"), "ok");
        // Encoded surrogate half.
        assert_eq!(chars(b"\xed\xa0\x80!"), "!");
    }

    #[test]
    fn invalid_tail_ends_cleanly() {
        assert_eq!(chars(b"abc\xf0\x9f"), "abc");
        assert_eq!(decode_rune(b"", 0), None);
        assert_eq!(decode_rune(b"\x80", 0), Some(Decoded::Invalid(1)));
    }

    #[test]
    fn peek_does_not_move_and_restarts_from_clone() {
        let mut runes = Runes::new(b"xy");
        assert_eq!(runes.peek().map(|r| r.ch), Some('x'));
        assert_eq!(runes.offset(), 0);
        let restart = runes.clone();
        runes.next();
        assert_eq!(runes.offset(), 1);
        assert_eq!(restart.map(|r| r.ch).collect::<String>(), "xy");
    }

    #[test]
    fn advance_to_is_clamped_to_input() {
        let mut runes = Runes::new(b"abc");
        runes.advance_to(10);
        assert_eq!(runes.offset(), 3);
        assert_eq!(runes.next(), None);
    }
}
