//! Fixed-width string chunking.

use alloc::vec::Vec;

/// Splits `s` into chunks of at most `width` characters.
///
/// Every chunk except the last holds exactly `width` characters; the last
/// holds the remainder. An empty input yields no chunks. Chunks borrow from
/// `s` and split on `char` boundaries, so multi-byte characters are never
/// torn apart.
///
/// `width` must be nonzero; zero is clamped to one character per chunk.
///
/// ```
/// let chunks = rsa_keyprep::chunk::split("abcde", 2);
/// assert_eq!(chunks, ["ab", "cd", "e"]);
/// ```
pub fn split(s: &str, width: usize) -> Vec<&str> {
    debug_assert_ne!(width, 0, "chunk width must be nonzero");
    let width = width.max(1);

    let mut chunks = Vec::with_capacity(s.len() / width + 1);
    let mut rest = s;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(index, _)| index);
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
