//! Lowercasing tokenizer.
//!
//! Splits text into runs of alphanumeric characters over a single lowercased
//! buffer. Uses a zero-per-token allocation design via byte spans; callers
//! apply their own filtering (alphabetic-only, stop words, minimum length).

/// Output of [`tokenize`]: one lowercased copy of the input plus the byte
/// range of every token inside it. Token text is borrowed from that buffer,
/// so no per-token strings are allocated.
pub struct Tokens {
    buffer: String,
    spans: Vec<(u32, u32)>, // byte range of each token in `buffer`
}

impl Tokens {
    /// Iterate over the tokens as `&str` slices of the buffer.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Token count.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// `true` when the input produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Tokenize text: lowercase, then split on non-alphanumeric characters.
///
/// Every alphanumeric run becomes a token; no stop-word or length filtering
/// happens here. Returns a [`Tokens`] struct that owns the lowercased buffer.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            spans.push((s as u32, i as u32));
        }
    }
    // Last token has no trailing separator
    if let Some(s) = start {
        spans.push((s as u32, buffer.len() as u32));
    }

    Tokens { buffer, spans }
}
