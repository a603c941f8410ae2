use std::path::PathBuf;

/// A request as read off the wire.
///
/// Only the target is acted upon. The method and version are kept as sent,
/// and header lines are kept verbatim so they can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token of the request line (expected to be GET, never checked)
    pub method: String,
    /// Second token of the request line (e.g. "/index.html")
    pub target: String,
    /// Third token, when present
    pub version: Option<String>,
    /// Header lines in arrival order, uninterpreted
    pub headers: Vec<String>,
}

impl Request {
    /// Maps the target onto the working directory.
    ///
    /// The target is appended to `.` as-is: no decoding, no normalisation,
    /// and `..` segments are left in place, so `/../x` names a file outside
    /// the working directory.
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(format!(".{}", self.target))
    }
}
