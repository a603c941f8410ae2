//! HTTP/1.0 request handling.
//!
//! Every connection carries exactly one request and is closed after the
//! response:
//!
//! ```text
//!   read request line ─▶ read headers until blank line
//!          │
//!          ▼
//!   "." + target ─▶ open file ─┬─ ok      ─▶ 200 + Content-Type + file bytes
//!                              └─ failure ─▶ 404 + text/html + error page
//!          │
//!          ▼
//!   shut down and drop the stream
//! ```
//!
//! - **`connection`**: runs the cycle above on one owned stream
//! - **`parser`**: reads lines and splits the request line
//! - **`request`**: the parsed request and its mapping to a local path
//! - **`response`**: status codes and the file-or-error-page response
//! - **`writer`**: puts a response on the wire, streaming file bodies
//! - **`mime`**: content type lookup by file suffix

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
