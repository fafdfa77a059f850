//! Newline-delimited JSON-RPC over stdin/stdout
//!
//! Each message is one line of compact JSON. Blank lines are skipped.
//! Generic over the reader and writer so tests can use `tokio::io::duplex`.

use crate::transport::{Transport, TransportError};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, trace};

/// Line-framed transport over an async reader/writer pair
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    closed: bool,
}

impl StdioTransport<Stdin, Stdout> {
    /// Transport bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            closed: false,
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Transport for StdioTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn receive(&mut self) -> Result<Option<String>, TransportError> {
        if self.closed {
            return Ok(None);
        }

        loop {
            let mut frame = Vec::new();
            let bytes_read = self.reader.read_until(b'\n', &mut frame).await?;
            if bytes_read == 0 {
                debug!("stdin closed by peer");
                return Ok(None);
            }

            // Invalid UTF-8 becomes U+FFFD and fails JSON parsing downstream
            let line = String::from_utf8_lossy(&frame);
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }

            trace!(bytes = line.len(), "received message");
            return Ok(Some(line.to_string()));
        }
    }

    async fn send(&mut self, message: &str) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }

        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        trace!(bytes = message.len(), "sent message");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        if self.closed {
            return Ok(());
        }

        self.closed = true;
        self.writer.flush().await?;
        self.writer.shutdown().await?;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
