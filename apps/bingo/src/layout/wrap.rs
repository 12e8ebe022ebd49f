//! Fixed character-width line wrapping.
//!
//! Widths are counted in `char`s, never pixels, so the result is independent of
//! the font size being tried. The algorithm is a greedy chunk packer:
//! - tabs expand to the next multiple of [`TAB_SIZE`] columns, then every
//!   ASCII whitespace character becomes a plain space
//! - the input is split into alternating whitespace runs and word chunks
//! - hyphenated compounds (`well-known`) split after the hyphen
//! - whitespace at the start of a continuation line and at the end of any line
//!   is dropped
//! - a chunk longer than the width is cut to fill the rest of the current line

/// Wrap width used for cell text.
pub const WRAP_WIDTH: usize = 20;

/// Column stop used when expanding tabs.
pub const TAB_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Chunk {
    text: String,
    is_space: bool,
}

impl Chunk {
    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Wraps `text` into lines of at most `width` characters.
///
/// Returns an empty vector for empty or whitespace-only text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut chunks = split_chunks(&expand_tabs(text, TAB_SIZE));
    chunks.reverse(); // used as a stack

    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        let mut current: Vec<Chunk> = Vec::new();
        let mut current_len = 0usize;

        if !lines.is_empty() && chunks.last().is_some_and(|c| c.is_space) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = chunk.len();
            if current_len + len > width {
                break;
            }
            current_len += len;
            if let Some(chunk) = chunks.pop() {
                current.push(chunk);
            }
        }

        if chunks.last().is_some_and(|c| c.len() > width) {
            split_long_chunk(&mut chunks, &mut current, current_len, width);
        }

        if current.last().is_some_and(|c| c.is_space) {
            current.pop();
        }

        if !current.is_empty() {
            lines.push(current.into_iter().map(|c| c.text).collect());
        }
    }

    lines
}

/// Moves as much of the oversized chunk on top of the stack as fits onto the
/// current line. A full line takes nothing; the chunk starts the next line.
/// Only a zero width forces one character per line.
fn split_long_chunk(
    chunks: &mut Vec<Chunk>,
    current: &mut Vec<Chunk>,
    current_len: usize,
    width: usize,
) {
    let Some(top) = chunks.last_mut() else {
        return;
    };
    let space_left = if width == 0 {
        1
    } else {
        width.saturating_sub(current_len)
    };
    if space_left == 0 {
        return;
    }
    let head: String = top.text.chars().take(space_left).collect();
    let tail: String = top.text.chars().skip(space_left).collect();

    current.push(Chunk {
        text: head,
        is_space: top.is_space,
    });
    if tail.is_empty() {
        chunks.pop();
    } else {
        top.text = tail;
    }
}

/// Replaces each tab with spaces up to the next multiple of `tab_size`.
/// The column resets after `\n` and `\r`.
fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = tab_size - column % tab_size;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Wrapping treats only ASCII whitespace as breakable; a no-break space stays
/// inside its word.
fn is_wrap_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

/// Splits text into whitespace runs and word chunks. Every whitespace
/// character becomes a plain space.
fn split_chunks(text: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buf = String::new();
    let mut buf_is_space = false;

    for c in text.chars() {
        let is_space = is_wrap_space(c);
        if !buf.is_empty() && is_space != buf_is_space {
            push_chunk(&mut chunks, std::mem::take(&mut buf), buf_is_space);
        }
        buf_is_space = is_space;
        buf.push(if is_space { ' ' } else { c });
    }
    if !buf.is_empty() {
        push_chunk(&mut chunks, buf, buf_is_space);
    }

    chunks
}

fn push_chunk(chunks: &mut Vec<Chunk>, text: String, is_space: bool) {
    if is_space {
        chunks.push(Chunk { text, is_space });
        return;
    }
    for piece in split_hyphenated(&text) {
        chunks.push(Chunk {
            text: piece,
            is_space: false,
        });
    }
}

/// Splits a word after every hyphen that sits between two alphanumerics.
fn split_hyphenated(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '-' && chars[i - 1].is_alphanumeric() && chars[i + 1].is_alphanumeric() {
            pieces.push(chars[start..=i].iter().collect());
            start = i + 1;
        }
    }
    pieces.push(chars[start..].iter().collect());
    pieces
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
