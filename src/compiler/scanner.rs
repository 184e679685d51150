//! Character scanner over grammar text.
//!
//! Single pass, one character of lookahead, explicit backup by `n`
//! characters. Consumed text is kept addressable for diagnostics.

use text_size::TextSize;

use crate::base::constants::is_word_terminator;

pub(crate) struct Scanner<'a> {
    text: &'a str,
    /// Byte offset of every char, plus a trailing `text.len()`.
    offsets: Vec<usize>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let offsets = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self {
            text,
            offsets,
            pos: 0,
        }
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        let start = *self.offsets.get(pos)?;
        self.text[start..].chars().next()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    pub(crate) fn read(&mut self) -> Option<char> {
        let c = self.char_at(self.pos)?;
        self.pos += 1;
        Some(c)
    }

    /// Step back `n` characters.
    pub(crate) fn backup(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    #[cfg(test)]
    pub(crate) fn at_eof(&self) -> bool {
        self.pos + 1 >= self.offsets.len()
    }

    fn byte_offset(&self) -> usize {
        self.offsets[self.pos.min(self.offsets.len() - 1)]
    }

    pub(crate) fn offset(&self) -> TextSize {
        TextSize::new(self.byte_offset() as u32)
    }

    /// Everything read so far.
    pub(crate) fn consumed(&self) -> &'a str {
        &self.text[..self.byte_offset()]
    }

    /// Read up to and including `close`, returning the text before it.
    /// Returns `None`, with everything consumed, if `close` never appears.
    pub(crate) fn read_until(&mut self, close: char) -> Option<&'a str> {
        let start = self.byte_offset();
        loop {
            let end = self.byte_offset();
            match self.read()? {
                c if c == close => return Some(&self.text[start..end]),
                _ => continue,
            }
        }
    }

    /// Read a bare word, leaving its terminator unread.
    pub(crate) fn read_word(&mut self) -> &'a str {
        let start = self.byte_offset();
        while let Some(c) = self.read() {
            if is_word_terminator(c) {
                self.backup(1);
                break;
            }
        }
        &self.text[start..self.byte_offset()]
    }
}
