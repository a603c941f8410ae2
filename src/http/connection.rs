use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::info;

use crate::config::Framing;
use crate::http::parser::read_request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One accepted connection, serving exactly one request.
///
/// The connection owns its stream; nothing else reads from or writes to it.
/// Dropping the connection closes the socket.
pub struct Connection<S = TcpStream> {
    stream: BufReader<S>,
    framing: Framing,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, framing: Framing) -> Self {
        Self {
            stream: BufReader::new(stream),
            framing,
        }
    }

    /// Reads the request, answers it, then shuts the stream down.
    ///
    /// On error nothing more is written; the caller drops the connection.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let request = read_request(&mut self.stream)
            .await
            .context("reading request")?;

        let path = request.local_path();
        let response = Response::open(&path).await;
        info!("Responding {} to {}", response.status.as_u16(), request.target);

        ResponseWriter::new(response, self.framing)
            .write_to(&mut self.stream)
            .await?;

        self.stream.shutdown().await.context("closing connection")?;
        Ok(())
    }
}
