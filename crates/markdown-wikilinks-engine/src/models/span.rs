use std::ops::Range;

/// A byte range `[start, end)` into the scanned text.
///
/// Links store spans rather than positions in some editor model, so slicing
/// the original text with a span reproduces the exact bracketed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Byte range, suitable for slicing the text the span was taken from.
    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Converts the byte span into character offsets within `text`.
    ///
    /// Hosts that address documents by character rather than by byte use this
    /// to build their own ranges. Returns `None` when the span is out of
    /// bounds for `text` or does not fall on character boundaries.
    pub fn char_range(self, text: &str) -> Option<Range<usize>> {
        let start = text.get(..self.start)?.chars().count();
        let len = text.get(self.range())?.chars().count();
        Some(start..start + len)
    }
}
