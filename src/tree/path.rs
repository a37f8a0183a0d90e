//! Key path splitting and joining

/// Split a key into path segments on `delimiter`.
///
/// Always yields at least one segment; empty segments are kept, so `"a..b"`
/// addresses a child named `""` under `a`.
pub fn split_key<'a>(key: &'a str, delimiter: &str) -> Vec<&'a str> {
    key.split(delimiter).collect()
}

/// Join path segments back into a key.
pub fn join_segments<S: AsRef<str>>(segments: &[S], delimiter: &str) -> String {
    let mut key = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            key.push_str(delimiter);
        }
        key.push_str(segment.as_ref());
    }
    key
}
