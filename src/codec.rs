use crate::character_sets::{COMPONENT_SET, URI_SET, starts_with_escape};
use percent_encoding::{AsciiSet, percent_decode_str, utf8_percent_encode};

/// Write percent-encoded string directly to buffer
fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a single URL component (query key, query value, path segment).
///
/// Unlike a strict component encoder this keeps `$ , : @ /` readable, as
/// they carry no meaning inside a query pair.
///
/// # Examples
///
/// ```
/// assert_eq!(urlkit::encode("a b&c/d"), "a%20b%26c/d");
/// assert_eq!(urlkit::encode("x[y]"), "x%5By%5D");
/// ```
pub fn encode(text: &str) -> String {
    let mut buffer = String::new();
    percent_encode_into(&mut buffer, text, COMPONENT_SET);
    buffer
}

/// Percent-encode a whole URL, leaving reserved delimiters intact.
///
/// Valid `%XX` escapes already present in `text` are kept as they are;
/// a stray `%` is escaped to `%25`.
pub fn encode_uri(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut buffer = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(offset) = memchr::memchr(b'%', &bytes[search..]) {
        let at = search + offset;
        if starts_with_escape(&bytes[at..]) {
            percent_encode_into(&mut buffer, &text[pos..at], URI_SET);
            buffer.push_str(&text[at..at + 3]);
            pos = at + 3;
            search = pos;
        } else {
            search = at + 1;
        }
    }

    percent_encode_into(&mut buffer, &text[pos..], URI_SET);
    buffer
}

/// Percent-decode `text`, treating `+` as an encoded space.
///
/// Never fails: escapes that are not hex, or whose bytes do not form valid
/// UTF-8, are copied to the output unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(urlkit::decode("a+b%20c"), "a b c");
/// assert_eq!(urlkit::decode("100%"), "100%");
/// assert_eq!(urlkit::decode("%E2%82%AC%FF"), "€%FF");
/// ```
pub fn decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut buffer = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(offset) = memchr::memchr2(b'+', b'%', &bytes[pos..]) else {
            buffer.push_str(&text[pos..]);
            break;
        };
        let at = pos + offset;
        buffer.push_str(&text[pos..at]);

        if bytes[at] == b'+' {
            buffer.push(' ');
            pos = at + 1;
            continue;
        }

        let mut end = at;
        while starts_with_escape(&bytes[end..]) {
            end += 3;
        }
        if end == at {
            log::debug!("stray '%' at offset {at} kept as-is");
            buffer.push('%');
            pos = at + 1;
            continue;
        }

        decode_escape_run(&text[at..end], &mut buffer);
        pos = end;
    }

    buffer
}

/// Decode a run made only of `%XX` triples.
/// Every decoded byte maps back to exactly three bytes of `run`.
fn decode_escape_run(run: &str, buffer: &mut String) {
    let decoded: Vec<u8> = percent_decode_str(run).collect();
    let mut rest = decoded.as_slice();
    let mut raw = run;

    loop {
        match core::str::from_utf8(rest) {
            Ok(valid) => {
                buffer.push_str(valid);
                return;
            }
            Err(err) => {
                let valid_len = err.valid_up_to();
                let bad_len = err.error_len().unwrap_or(rest.len() - valid_len);
                buffer.push_str(&String::from_utf8_lossy(&rest[..valid_len]));

                let bad_raw = &raw[valid_len * 3..(valid_len + bad_len) * 3];
                log::debug!("malformed escape sequence {bad_raw} kept as-is");
                buffer.push_str(bad_raw);

                rest = &rest[valid_len + bad_len..];
                raw = &raw[(valid_len + bad_len) * 3..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("hello world"), "hello%20world");
        assert_eq!(encode("a=b&c"), "a%3Db%26c");
        assert_eq!(encode("1+1"), "1%2B1");
        assert_eq!(encode("user@host:8080/p"), "user@host:8080/p");
        assert_eq!(encode("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode("é"), "%C3%A9");
        assert_eq!(encode("50%"), "50%25");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("hello%20world"), "hello world");
        assert_eq!(decode("hello+world"), "hello world");
        assert_eq!(decode("%2B"), "+");
        assert_eq!(decode("%C3%A9"), "é");
        assert_eq!(decode("plain"), "plain");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_malformed_passthrough() {
        assert_eq!(decode("%"), "%");
        assert_eq!(decode("%4"), "%4");
        assert_eq!(decode("%zz%41"), "%zzA");
        assert_eq!(decode("%C3"), "%C3");
        assert_eq!(decode("%41%C3%42"), "A%C3B");
        assert_eq!(decode("%FF%C3%A9"), "%FFé");
    }

    #[test]
    fn test_encode_decode_inverse() {
        for text in ["a b", "x[y][]", "&=?#+%", "日本語", "tab\there"] {
            assert_eq!(decode(&encode(text)), text);
        }
    }

    #[test]
    fn test_encode_uri() {
        assert_eq!(
            encode_uri("http://a.com/my file?x=1&y=[2]#top"),
            "http://a.com/my%20file?x=1&y=%5B2%5D#top"
        );
        assert_eq!(encode_uri("http://a.com/b%20c"), "http://a.com/b%20c");
        assert_eq!(encode_uri("100%"), "100%25");
        assert_eq!(encode_uri("%%41"), "%25%41");
    }
}
