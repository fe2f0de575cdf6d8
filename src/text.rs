//! Character-offset helpers
//!
//! Selector offsets count Unicode characters, the way annotation
//! clients count positions, while `&str` indexes bytes. Everything
//! that crosses that boundary lives here.

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at char offset `idx`.
///
/// `idx == char_len(s)` maps to `s.len()`; offsets past that yield
/// `None`.
pub(crate) fn byte_of(s: &str, idx: usize) -> Option<usize> {
    let mut count = 0;
    for (byte, _) in s.char_indices() {
        if count == idx {
            return Some(byte);
        }
        count += 1;
    }
    if idx == count {
        Some(s.len())
    } else {
        None
    }
}

/// Char offset of the character starting at byte offset `byte`.
///
/// `byte` must lie on a character boundary.
pub(crate) fn char_at_byte(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Slice `s` by char offsets, clamping both bounds to the text.
pub(crate) fn slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_of(s, start).unwrap_or(s.len());
    let to = byte_of(s, end).unwrap_or(s.len());
    if from >= to {
        ""
    } else {
        &s[from..to]
    }
}

/// Byte offsets of every occurrence of `needle` in `haystack`,
/// overlapping occurrences included. An empty needle matches nothing.
pub(crate) fn find_all_bytes(haystack: &str, needle: &str) -> Vec<usize> {
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }
    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let at = from + found;
        hits.push(at);
        match haystack[at..].chars().next() {
            Some(c) => from = at + c.len_utf8(),
            None => break,
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("señal"), 5);
        assert_eq!("señal".len(), 6);
    }

    #[test]
    fn test_byte_of_steps_over_wide_characters() {
        assert_eq!(byte_of("señal", 0), Some(0));
        assert_eq!(byte_of("señal", 3), Some(4));
        assert_eq!(byte_of("señal", 5), Some(6));
        assert_eq!(byte_of("señal", 6), None);
    }

    #[test]
    fn test_slice_by_char_offsets() {
        assert_eq!(slice("señal", 2, 4), "ña");
        assert_eq!(slice("señal", 0, 5), "señal");
    }

    #[test]
    fn test_slice_clamps_to_the_text() {
        assert_eq!(slice("abc", 1, 10), "bc");
        assert_eq!(slice("abc", 5, 10), "");
        assert_eq!(slice("abc", 2, 2), "");
    }

    #[test]
    fn test_find_all_bytes_sees_overlapping_occurrences() {
        assert_eq!(find_all_bytes("aaa", "aa"), vec![0, 1]);
        assert_eq!(find_all_bytes("banana", "na"), vec![2, 4]);
    }

    #[test]
    fn test_find_all_bytes_with_empty_needle() {
        assert!(find_all_bytes("abc", "").is_empty());
    }
}
