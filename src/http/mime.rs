//! MIME type detection by file name suffix.

/// Content type sent when no suffix matches.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Suffix table, checked in order. Matching is case-sensitive.
pub const MIME_TYPES: &[(&str, &str)] = &[
    (".htm", "text/html"),
    (".html", "text/html"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".css", "text/css"),
];

/// Returns the content type for a request path or file name.
///
/// ```
/// use docserve::http::mime::content_type;
/// assert_eq!(content_type("./index.html"), "text/html");
/// assert_eq!(content_type("./photo.JPEG"), "application/octet-stream");
/// ```
pub fn content_type(path: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_suffixes() {
        assert_eq!(content_type("/a.htm"), "text/html");
        assert_eq!(content_type("/a.html"), "text/html");
        assert_eq!(content_type("/a.jpeg"), "image/jpeg");
        assert_eq!(content_type("/a.gif"), "image/gif");
        assert_eq!(content_type("/a.css"), "text/css");
    }

    #[test]
    fn test_unknown_suffix_falls_back() {
        assert_eq!(content_type("/a.bin"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type("/a.jpg"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type("/"), DEFAULT_CONTENT_TYPE);
    }
}
