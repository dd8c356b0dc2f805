use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::config::MalformedRequestPolicy;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::{Route, RouteTable};

/// Size of the single read a connection gets for its request.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Reasons a connection ends without completing its exchange.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    #[error("{0} timed out after {1:?}")]
    Timeout(&'static str, Duration),

    #[error(transparent)]
    Malformed(#[from] ParseError),
}

/// Per-connection knobs.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub malformed_requests: MalformedRequestPolicy,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
            malformed_requests: MalformedRequestPolicy::Drop,
        }
    }
}

/// Serves exactly one request over one stream.
///
/// The stream is owned by the connection and closed when it is dropped, so
/// every exit from [`Connection::run`] releases it.
pub struct Connection<S> {
    stream: S,
    routes: Arc<RouteTable>,
    settings: ConnectionSettings,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsed(Request),
    Dispatched(Request, Option<Route>),
    Responded(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, routes: Arc<RouteTable>, settings: ConnectionSettings) -> Self {
        Self {
            stream,
            routes,
            settings,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to `Closed`. An `Err` is the failed state: the
    /// exchange did not complete, and a failed write may have left part of
    /// the response on the wire.
    pub async fn run(&mut self) -> Result<(), ConnectionError> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Parsed(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Parsed(req) => {
                    let route = self.routes.resolve(&req).cloned();
                    self.state = ConnectionState::Dispatched(req, route);
                }

                ConnectionState::Dispatched(req, route) => {
                    let response = match route {
                        Some(route) => route.handle(&req).await,
                        None => Response::not_found(),
                    };

                    tracing::debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );
                    self.state = ConnectionState::Responded(ResponseWriter::new(&response));
                }

                ConnectionState::Responded(mut writer) => {
                    self.write_response(&mut writer).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!(error = %e, "Shutdown after response failed");
                    }
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads once into a fixed buffer and decodes it. `Ok(None)` means a
    /// malformed request was already answered with 400.
    pub async fn read_request(&mut self) -> Result<Option<Request>, ConnectionError> {
        let mut buf = [0u8; READ_BUFFER_SIZE];

        let n = timeout(self.settings.read_timeout, self.stream.read(&mut buf))
            .await
            .map_err(|_| ConnectionError::Timeout("read", self.settings.read_timeout))?
            .map_err(ConnectionError::Read)?;

        if n == 0 {
            return Err(ConnectionError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "peer closed before sending a request",
            )));
        }

        match parse_http_request(&buf[..n]) {
            Ok(req) => {
                tracing::debug!(request = ?req, "Request decoded");
                Ok(Some(req))
            }
            Err(e) => match self.settings.malformed_requests {
                MalformedRequestPolicy::Drop => Err(e.into()),
                MalformedRequestPolicy::BadRequest => {
                    tracing::debug!(error = %e, "Answering malformed request with 400");
                    let mut writer = ResponseWriter::new(&Response::bad_request());
                    self.write_response(&mut writer).await?;
                    Ok(None)
                }
            },
        }
    }

    async fn write_response(&mut self, writer: &mut ResponseWriter) -> Result<(), ConnectionError> {
        tracing::debug!(
            response = %String::from_utf8_lossy(writer.as_bytes()),
            "Writing response"
        );

        timeout(self.settings.write_timeout, writer.write_to_stream(&mut self.stream))
            .await
            .map_err(|_| ConnectionError::Timeout("write", self.settings.write_timeout))?
            .map_err(ConnectionError::Write)
    }
}
