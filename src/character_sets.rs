use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Component percent-encode set used by `encode` and the query serializer.
///
/// Everything except ASCII alphanumerics and the URL-safe punctuation
/// `- _ . ! ~ * ' ( ) $ , : @ /` is escaped. Query delimiters (`& = + ? #`),
/// brackets, `;`, `%` and space are always escaped so that `decode` inverts it.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'$')
    .remove(b',')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// Whole-URI percent-encode set.
/// Leaves reserved delimiters intact: `; , / ? : @ & = + $ #`
pub const URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Check whether `bytes` starts with a complete `%XX` escape
pub fn starts_with_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_escape() {
        assert!(starts_with_escape(b"%20"));
        assert!(starts_with_escape(b"%aFrest"));
        assert!(!starts_with_escape(b"%2"));
        assert!(!starts_with_escape(b"%zz"));
        assert!(!starts_with_escape(b"20"));
    }

    #[test]
    fn test_sets_keep_delimiters_apart() {
        let component = |s: &str| percent_encoding::utf8_percent_encode(s, COMPONENT_SET).to_string();
        let uri = |s: &str| percent_encoding::utf8_percent_encode(s, URI_SET).to_string();

        assert_eq!(component("a&b=[c]+d/e"), "a%26b%3D%5Bc%5D%2Bd/e");
        assert_eq!(uri("a&b=c#d e%"), "a&b=c#d%20e%25");
    }
}
