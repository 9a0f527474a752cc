use super::Span;

/// One `[[name]]` or `[[name|display]]` occurrence found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// Text between `[[` and the first `|` or `]]`, trimmed. May be empty.
    pub raw_name: String,
    /// Trimmed text after `|`, if the link has one. May be empty.
    pub display_text: Option<String>,
    /// Span of the whole link, delimiters included.
    pub span: Span,
}

impl LinkOccurrence {
    pub fn start_offset(&self) -> usize {
        self.span.start
    }

    pub fn end_offset(&self) -> usize {
        self.span.end
    }

    /// Display text, treating an empty `[[name|]]` alias as absent.
    pub fn label(&self) -> Option<&str> {
        self.display_text.as_deref().filter(|d| !d.is_empty())
    }
}
