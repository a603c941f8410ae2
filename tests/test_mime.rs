use docserve::http::mime::{DEFAULT_CONTENT_TYPE, MIME_TYPES, content_type};

#[test]
fn test_table_order() {
    let suffixes: Vec<&str> = MIME_TYPES.iter().map(|(s, _)| *s).collect();

    assert_eq!(suffixes, vec![".htm", ".html", ".jpeg", ".gif", ".css"]);
}

#[test]
fn test_request_paths() {
    assert_eq!(content_type("./a.html"), "text/html");
    assert_eq!(content_type("./a.htm"), "text/html");
    assert_eq!(content_type("./a.jpeg"), "image/jpeg");
    assert_eq!(content_type("./a.gif"), "image/gif");
    assert_eq!(content_type("./a.css"), "text/css");
    assert_eq!(content_type("./a.bin"), "application/octet-stream");
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(content_type("./A.HTML"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type("./a.Css"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_only_the_suffix_counts() {
    assert_eq!(content_type("./a.html.bak"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type("./style.css/x.gif"), "image/gif");
    assert_eq!(content_type("./noext"), DEFAULT_CONTENT_TYPE);
}
