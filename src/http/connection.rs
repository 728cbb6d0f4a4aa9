use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::Config;
use crate::http::files;
use crate::http::parser::parse_request_line;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer;

/// Bytes taken from the client in the single read per connection.
pub const REQUEST_BUFFER_SIZE: usize = 4096;

/// One accepted client, carried through exactly one request.
pub struct Connection<'a, S> {
    stream: S,
    config: &'a Config,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(Response),
    Closed,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: &'a Config) -> Self {
        Self {
            stream,
            config,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Some(Ok(req)) => ConnectionState::Processing(req),
                        Some(Err(response)) => ConnectionState::Writing(response),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.handle_request(&req).await;
                    tracing::info!(
                        method = %req.method,
                        path = %req.display_path(),
                        status = response.status.as_u16(),
                        bytes = response.content_length(),
                        "Request handled"
                    );
                    self.state = ConnectionState::Writing(response);
                }

                ConnectionState::Writing(response) => {
                    writer::send(&mut self.stream, &response).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Reads once and parses the request line.
    ///
    /// `None` means the client sent nothing and gets no reply. A request
    /// line that cannot be parsed comes back as a ready 400 response.
    async fn read_request(&mut self) -> Option<Result<Request, Response>> {
        let mut buf = [0u8; REQUEST_BUFFER_SIZE];

        let n = match self.stream.read(&mut buf).await {
            Ok(0) => {
                tracing::debug!("Client closed before sending a request");
                return None;
            }
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read request");
                return None;
            }
        };

        match parse_request_line(&buf[..n]) {
            Ok(req) => Some(Ok(req)),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request line");
                Some(Err(Response::bad_request()))
            }
        }
    }

    async fn handle_request(&self, req: &Request) -> Response {
        if req.method != Method::GET {
            return Response::method_not_allowed();
        }

        let path = req.resolve(&self.config.base_dir);
        files::serve(&path).await
    }
}

/// Runs one connection to completion. The stream is dropped, and so
/// closed, when this returns.
pub async fn handle<S>(stream: S, config: &Config) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    Connection::new(stream, config).run().await
}
