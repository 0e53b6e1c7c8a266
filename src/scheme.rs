/// How a protocol is written in front of the authority when building a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    /// `<protocol>://`
    #[default]
    Hierarchical,
    /// `file://` followed by a root `/`
    File,
    /// `mailto:` with no slashes
    Mailto,
}

impl SchemeType {
    /// Text written before the authority
    pub fn prefix(self, protocol: &str) -> String {
        match self {
            Self::File => "file://".to_string(),
            Self::Mailto => "mailto:".to_string(),
            Self::Hierarchical => format!("{protocol}://"),
        }
    }
}

/// Get the scheme type from a protocol string.
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(protocol: &str) -> SchemeType {
    let bytes = protocol.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (6, Some(b'm')) if bytes == b"mailto" => SchemeType::Mailto,
        _ => SchemeType::Hierarchical,
    }
}
