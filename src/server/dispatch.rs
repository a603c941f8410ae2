use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinHandle;

use crate::config::{Dispatch, Framing};
use crate::http::connection::Connection;

/// Room for one more handler. Released when dropped.
pub struct Slot(Option<OwnedSemaphorePermit>);

/// Spawns one task per connection, optionally capping how many run at once.
#[derive(Clone)]
pub struct Dispatcher {
    limit: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    pub fn new(mode: Dispatch) -> Self {
        let limit = match mode {
            Dispatch::Unbounded => None,
            Dispatch::Bounded(n) => Some(Arc::new(Semaphore::new(n.max(1)))),
        };
        Self { limit }
    }

    /// Waits until another handler may start. Never waits when unbounded.
    pub async fn reserve(&self) -> Slot {
        match &self.limit {
            // The semaphore is never closed, so acquiring only fails if it is.
            Some(sem) => Slot(sem.clone().acquire_owned().await.ok()),
            None => Slot(None),
        }
    }

    /// Runs the handler for `stream` on its own task.
    ///
    /// Handler errors are logged here and go no further; the stream is
    /// dropped, and with it the socket, when the task ends.
    pub fn spawn<S>(&self, slot: Slot, stream: S, peer: SocketAddr, framing: Framing) -> JoinHandle<()>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        tokio::spawn(async move {
            let _slot = slot;
            let conn = Connection::new(stream, framing);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

    fn available(dispatcher: &Dispatcher) -> Option<usize> {
        dispatcher.limit.as_ref().map(|sem| sem.available_permits())
    }

    #[tokio::test]
    async fn bounded_slot_held_until_handler_ends() {
        let dispatcher = Dispatcher::new(Dispatch::Bounded(1));
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();
        assert_eq!(available(&dispatcher), Some(1));

        let (mut client, server) = duplex(64 * 1024);
        let slot = dispatcher.reserve().await;
        let task = dispatcher.spawn(slot, server, peer, Framing::Legacy);
        assert_eq!(available(&dispatcher), Some(0));

        client
            .write_all(b"GET /tests/fixtures/style.css HTTP/1.0\r\n\r\n")
            .await
            .unwrap();
        let mut out = Vec::new();
        client.read_to_end(&mut out).await.unwrap();
        task.await.unwrap();

        assert!(out.starts_with(b"HTTP/1.1 200 OK\r\nContent-Type: text/css\r\n\n"));
        assert_eq!(available(&dispatcher), Some(1));
    }

    #[test]
    fn bounded_zero_still_admits_one() {
        let dispatcher = Dispatcher::new(Dispatch::Bounded(0));

        assert_eq!(available(&dispatcher), Some(1));
    }

    #[tokio::test]
    async fn unbounded_never_waits() {
        let dispatcher = Dispatcher::new(Dispatch::Unbounded);
        let _a = dispatcher.reserve().await;
        let _b = dispatcher.reserve().await;

        assert_eq!(available(&dispatcher), None);
    }
}
