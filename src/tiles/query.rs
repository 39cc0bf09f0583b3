//! Query-string assembly shared by the tile URL builders.

/// Percent-encodes a query component, leaving only RFC 3986 unreserved
/// characters as-is.
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// Ordered `key=value` pair collector. Values pushed with [`QueryString::push`]
/// are percent-encoded; [`QueryString::push_raw`] appends the value verbatim,
/// which is how placeholder tokens like `{bbox-epsg-3857}` survive into the
/// final URL.
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair with a percent-encoded value.
    pub fn push(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{key}={}", encode(value)));
    }

    /// Appends a pair without encoding the value.
    pub fn push_raw(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{key}={value}"));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Joins the collected pairs into `a=1&b=2` form.
    pub fn finish(self) -> String {
        self.pairs.join("&")
    }
}
