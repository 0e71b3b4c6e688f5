//! Incrementally revealed text
//!
//! Advisory responses are delivered as a finite, restartable sequence of
//! chunks. Consumers append chunks as they arrive and stop reading whenever
//! they like; there is no cancellation beyond that.

/// Words per chunk when splitting a complete response
pub const DEFAULT_WORDS_PER_CHUNK: usize = 3;

/// A lazy chunked view over a complete response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStream {
    text: String,
    words_per_chunk: usize,
    /// Byte offset of the next unread chunk
    cursor: usize,
}

impl TextStream {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_chunk_size(text, DEFAULT_WORDS_PER_CHUNK)
    }

    pub fn with_chunk_size(text: impl Into<String>, words_per_chunk: usize) -> Self {
        Self {
            text: text.into(),
            words_per_chunk: words_per_chunk.max(1),
            cursor: 0,
        }
    }

    /// True once every chunk has been yielded
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Rewind to the first chunk
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// The full response, regardless of how much was read
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Drain the remaining chunks into one string
    pub fn collect_text(&mut self) -> String {
        self.by_ref().collect()
    }
}

impl Iterator for TextStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        let rest = &self.text[self.cursor..];

        // Each chunk carries its words plus the whitespace that follows them
        let mut words = 0;
        let mut in_word = false;
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            if c.is_whitespace() {
                if in_word {
                    words += 1;
                    in_word = false;
                }
            } else {
                if !in_word && words == self.words_per_chunk {
                    end = i;
                    break;
                }
                in_word = true;
            }
        }

        let chunk = rest[..end].to_string();
        self.cursor += end;
        Some(chunk)
    }
}
