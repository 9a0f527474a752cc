//! Wiki link delimiters. The scanner refers to these; it never hardcodes
//! `[[` or `|` itself.

pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    /// A lone `]` ends the name or display section, closing the link only
    /// when followed by a second `]`.
    pub const CLOSE_BYTE: u8 = b']';
    pub const ALIAS: u8 = b'|';
}
