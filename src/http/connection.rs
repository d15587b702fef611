use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::handler;
use crate::http::writer::ResponseWriter;

/// Handles a single accepted connection: one request, one response,
/// then close. Nothing persists across connections.
pub struct Connection {
    stream: TcpStream,
    config: Config,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Config) -> Self {
        Self { stream, config }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let raw = self.receive_request().await?;

        if raw.is_empty() {
            // Client connected and went away without sending anything.
            return Ok(());
        }

        let response = handler::dispatch(&raw, &self.config).await;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Reads fixed-size chunks until a short read marks the end of the
    /// request.
    ///
    /// Known framing limitation: a request whose length is an exact
    /// multiple of the buffer size never produces a short read, so this
    /// loop would sit waiting for bytes that never come.
    async fn receive_request(&mut self) -> anyhow::Result<Vec<u8>> {
        let mut full = BytesMut::with_capacity(self.config.recv_buffer_size);
        let mut chunk = vec![0u8; self.config.recv_buffer_size];

        loop {
            let n = self.stream.read(&mut chunk).await?;
            full.extend_from_slice(&chunk[..n]);

            if n < self.config.recv_buffer_size {
                break;
            }
        }

        Ok(full.to_vec())
    }
}
