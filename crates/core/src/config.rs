use flexlayout_transport::DeflateTransport;

/// Name of the element wrapping the root node in a layout document.
pub const LAYOUT_ELEMENT: &str = "Layout";

/// The only permalink format version this crate reads or writes.
pub const PERMALINK_VERSION: u64 = 1;

/// Deepest CBOR nesting (arrays, maps and tags) a permalink may hold. Every
/// node takes two levels, so trees deeper than about 127 nodes cannot be
/// shared.
pub const MAX_PERMALINK_NESTING: usize = 256;

/// Controls how markup is written. Never changes what is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl MarkupOptions {
    /// Single-line output.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermalinkOptions {
    /// Deflate level, 0 (store) to 9 (best).
    pub compression: u32,
}

impl PermalinkOptions {
    pub fn transport(&self) -> DeflateTransport {
        DeflateTransport::new(self.compression)
    }
}

impl Default for PermalinkOptions {
    fn default() -> Self {
        Self { compression: 6 }
    }
}
