/// Split a query string into its `&`-separated segments, skipping empty ones.
/// Uses memchr for the separator scan.
pub fn split_segments(query: &str) -> impl Iterator<Item = &str> {
    let bytes = query.as_bytes();
    let mut start = 0;
    memchr::memchr_iter(b'&', bytes)
        .chain(core::iter::once(bytes.len()))
        .map(move |end| {
            let segment = &query[start..end];
            start = end + 1;
            segment
        })
        .filter(|segment| !segment.is_empty())
}

/// Split a segment on its first `=`.
/// A segment without `=` has an empty value.
pub fn split_pair(segment: &str) -> (&str, &str) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, ""), |pos| {
        (&segment[..pos], &segment[pos + 1..])
    })
}

/// Split a bracketed key into its path: `a[b][]` becomes `["a", "b", ""]`.
///
/// A key is only treated as bracketed when its head contains `[` and it
/// ends with `]`; anything else is a single plain key.
pub fn split_key(key: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = key.split("][").collect();
    let last = segments.len() - 1;

    if !segments[0].contains('[') || !segments[last].ends_with(']') {
        return vec![key];
    }

    let tail = segments[last];
    segments[last] = &tail[..tail.len() - 1];

    let head = segments.remove(0);
    let mut path: Vec<&str> = head.split('[').collect();
    path.extend(segments);
    path
}
