/// Errors that can occur while parsing a URL into its components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The URL grammar produced no match for the input
    MalformedInput,
    /// No URL was given and no current location was configured
    NoDefaultLocation,
    /// A component name that is not part of the component tree
    UnknownField,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MalformedInput => "Malformed input",
            Self::NoDefaultLocation => "No default location available",
            Self::UnknownField => "Unknown URL component",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
