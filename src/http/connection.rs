use std::sync::Arc;

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Serves exactly one request on an accepted stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_limit: usize,
    router: Arc<Router>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_buffer_size),
            read_limit: read_buffer_size,
            router,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let Some(request) = self.read_request().await? else {
            return Ok(());
        };

        let response = self.router.handle(&request).await;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;
        self.stream.shutdown().await?;

        Ok(())
    }

    /// Performs the single read this connection gets.
    ///
    /// Whatever arrived, up to the buffer's capacity, is the request.
    /// Returns `None` if the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut limited = (&mut self.buffer).limit(self.read_limit);
        let n = self.stream.read_buf(&mut limited).await?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(parse_request(&self.buffer[..n])))
    }
}
