use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders the header block, blank line included.
pub fn serialize_head(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128);

    buf.put_slice(HTTP_VERSION.as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(resp.status.status_line().as_bytes());
    buf.put_slice(b"\r\n");

    buf.put_slice(b"Content-Type: ");
    buf.put_slice(resp.content_type.as_bytes());
    buf.put_slice(b"\r\n");

    buf.put_slice(b"Content-Length: ");
    buf.put_slice(resp.content_length().to_string().as_bytes());
    buf.put_slice(b"\r\n");

    buf.put_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.freeze()
}

/// Writes one response as two ordered writes: header block, then body.
///
/// The connection is left open; closing it is the caller's job.
pub struct ResponseWriter<'a> {
    head: Bytes,
    body: &'a [u8],
}

impl<'a> ResponseWriter<'a> {
    pub fn new(response: &'a Response) -> Self {
        Self {
            head: serialize_head(response),
            body: &response.body,
        }
    }

    pub async fn write_to_stream<W>(&self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;
        if !self.body.is_empty() {
            stream.write_all(self.body).await?;
        }
        stream.flush().await?;

        Ok(())
    }
}

/// Sends one response. The connection is left open.
pub async fn send<W>(stream: &mut W, response: &Response) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    ResponseWriter::new(response).write_to_stream(stream).await
}
