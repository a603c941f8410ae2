use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tracing::info;

use crate::http::request::Request;

/// Longest request or header line accepted, terminator included.
pub const MAX_LINE_LEN: usize = 8192;

#[derive(Debug)]
pub enum ParseError {
    /// Connection closed, or the request line was blank.
    Empty,
    /// Request line had fewer than two tokens.
    MissingTarget,
    /// Connection closed before the blank line ending the headers.
    UnterminatedHeaders,
    /// A line ran past `MAX_LINE_LEN` without a newline.
    LineTooLong,
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request"),
            ParseError::MissingTarget => write!(f, "request line has no target"),
            ParseError::UnterminatedHeaders => write!(f, "connection closed inside headers"),
            ParseError::LineTooLong => write!(f, "line longer than {} bytes", MAX_LINE_LEN),
            ParseError::Io(e) => write!(f, "read failed: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Splits a request line into method, target and optional version.
///
/// Returns a `Request` with no headers.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_ascii_whitespace();

    let method = parts.next().ok_or(ParseError::Empty)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;
    let version = parts.next();

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.map(str::to_string),
        headers: Vec::new(),
    })
}

/// Reads one line, without its `\n` or `\r\n` terminator.
///
/// Returns `None` at end of stream. A final line with no terminator is
/// returned as-is.
pub async fn read_line<R>(reader: &mut R) -> Result<Option<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = (&mut *reader)
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', &mut buf)
        .await?;

    if n == 0 {
        return Ok(None);
    }
    if n == MAX_LINE_LEN && buf.last() != Some(&b'\n') {
        return Err(ParseError::LineTooLong);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Reads the request line and every header line up to the blank line.
///
/// The request line and each header are logged as they arrive. The request
/// body, if any, is left unread.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = read_line(reader).await?.ok_or(ParseError::Empty)?;
    info!("{}", request_line);

    let mut headers = Vec::new();
    loop {
        match read_line(reader).await? {
            Some(line) if line.is_empty() => break,
            Some(line) => {
                info!("{}", line);
                headers.push(line);
            }
            None => return Err(ParseError::UnterminatedHeaders),
        }
    }

    let mut request = parse_request_line(&request_line)?;
    request.headers = headers;
    Ok(request)
}
