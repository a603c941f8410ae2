use std::path::Path;

use tokio::fs::File;
use tracing::debug;

use crate::http::mime;

/// Body of every 404 response.
pub const NOT_FOUND_HTML: &str =
    "<HTML><HEAD><TITLE>404 Not Found</TITLE></HEAD><BODY>404 Not Found</BODY></HTML>";

/// Status codes this server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// What follows the response head.
#[derive(Debug)]
pub enum Body {
    /// An open file, streamed in chunks.
    File(File),
    /// The fixed 404 page.
    NotFoundPage,
}

/// A response ready to be written.
///
/// Holds the open file rather than its contents; bytes are only read while
/// the body is being sent.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Body,
}

impl Response {
    /// 200 response for an already opened file. The content type comes from
    /// the suffix of `path`.
    pub fn file(file: File, path: &str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: mime::content_type(path),
            body: Body::File(file),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Body::NotFoundPage,
        }
    }

    /// Opens `path` for reading and builds the matching response.
    ///
    /// Anything that cannot be opened as a regular readable file, including
    /// a directory, becomes a 404.
    pub async fn open(path: &Path) -> Self {
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                debug!("Cannot open {}: {}", path.display(), e);
                return Self::not_found();
            }
        };

        match file.metadata().await {
            Ok(meta) if !meta.is_dir() => Self::file(file, &path.to_string_lossy()),
            Ok(_) => Self::not_found(),
            Err(e) => {
                debug!("Cannot stat {}: {}", path.display(), e);
                Self::not_found()
            }
        }
    }
}
