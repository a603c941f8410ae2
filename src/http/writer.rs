use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::Framing;
use crate::http::response::{Body, NOT_FOUND_HTML, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Largest slice of a file read and written in one step.
pub const CHUNK_SIZE: usize = 1024;

/// Status line, Content-Type line and the blank line ending the head.
///
/// Header lines always end in CRLF. The blank line is a bare `\n` under
/// `Framing::Legacy`.
pub fn serialize_head(resp: &Response, framing: Framing) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Content-Type: ");
    buf.extend_from_slice(resp.content_type.as_bytes());
    buf.extend_from_slice(b"\r\n");

    match framing {
        Framing::Legacy => buf.extend_from_slice(b"\n"),
        Framing::Standard => buf.extend_from_slice(b"\r\n"),
    }

    buf
}

/// The 404 page as it goes on the wire.
///
/// Legacy framing sends two bytes per character, big-endian.
pub fn encode_not_found(framing: Framing) -> Vec<u8> {
    match framing {
        Framing::Legacy => NOT_FOUND_HTML
            .encode_utf16()
            .flat_map(u16::to_be_bytes)
            .collect(),
        Framing::Standard => NOT_FOUND_HTML.as_bytes().to_vec(),
    }
}

pub struct ResponseWriter {
    response: Response,
    framing: Framing,
}

impl ResponseWriter {
    pub fn new(response: Response, framing: Framing) -> Self {
        Self { response, framing }
    }

    /// Writes head and body, returning the number of body bytes sent.
    pub async fn write_to<W>(self, stream: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let head = serialize_head(&self.response, self.framing);
        stream
            .write_all(&head)
            .await
            .context("writing response head")?;

        match self.response.body {
            Body::File(mut file) => {
                let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
                let mut sent = 0u64;

                loop {
                    chunk.clear();
                    let n = file.read_buf(&mut chunk).await.context("reading file")?;
                    if n == 0 {
                        break;
                    }

                    stream
                        .write_all(&chunk)
                        .await
                        .context("writing file chunk")?;
                    sent += n as u64;
                }

                debug!("Streamed {} bytes", sent);
                Ok(sent)
            }

            Body::NotFoundPage => {
                let page = encode_not_found(self.framing);
                stream
                    .write_all(&page)
                    .await
                    .context("writing 404 page")?;
                Ok(page.len() as u64)
            }
        }
    }
}
