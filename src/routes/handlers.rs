//! Endpoint behavior behind the route table.
//!
//! Endpoints that take a path argument get the path components that follow
//! the matched route's pattern. A missing argument is a 400 response.
//! Every failure an endpoint can meet maps to a status code, so endpoints
//! always produce a response.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;

/// Storage root for the file endpoints.
#[derive(Debug, Clone)]
pub struct Storage {
    root: Arc<PathBuf>,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Joins path components under the root. Returns `None` for an empty
    /// list or when a component could step outside the root.
    pub fn locate(&self, components: &[&str]) -> Option<PathBuf> {
        if components.is_empty() {
            return None;
        }

        let mut path = self.root.as_ref().clone();
        for component in components {
            if matches!(*component, "." | "..") || component.contains('\\') {
                return None;
            }
            path.push(component);
        }
        Some(path)
    }
}

/// The closed set of behaviors a route can dispatch to.
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// `200` with no body
    Root,
    /// Echoes the rest of the path back as `text/plain`
    Echo,
    /// Returns the `User-Agent` header as `text/plain`
    UserAgent,
    /// Serves a file from storage
    ReadFile(Storage),
    /// Stores the request body as a file
    WriteFile(Storage),
}

impl Endpoint {
    /// Produces the response for `req`, given the path components after
    /// the route's pattern.
    pub async fn handle(&self, req: &Request, argument: &[&str]) -> Response {
        match self {
            Endpoint::Root => Response::ok(),
            Endpoint::Echo => echo(argument),
            Endpoint::UserAgent => user_agent(req),
            Endpoint::ReadFile(storage) => read_file(storage, argument).await,
            Endpoint::WriteFile(storage) => write_file(storage, argument, req.body_bytes()).await,
        }
    }
}

fn echo(argument: &[&str]) -> Response {
    if argument.is_empty() {
        return Response::bad_request();
    }

    Response::ok().with_text_body(argument.join("/"))
}

fn user_agent(req: &Request) -> Response {
    match req.header("User-Agent") {
        Some(agent) if !agent.is_empty() => Response::ok().with_text_body(agent),
        _ => Response::bad_request(),
    }
}

async fn read_file(storage: &Storage, argument: &[&str]) -> Response {
    let Some(path) = storage.locate(argument) else {
        return Response::bad_request();
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => Response::ok().with_body(contents, "application/octet-stream"),
        Err(e) if e.kind() == ErrorKind::NotFound => Response::not_found(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read file");
            Response::internal_error()
        }
    }
}

async fn write_file(storage: &Storage, argument: &[&str], contents: &[u8]) -> Response {
    let Some(path) = storage.locate(argument) else {
        return Response::bad_request();
    };

    match tokio::fs::write(&path, contents).await {
        Ok(()) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "File stored");
            Response::created()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write file");
            Response::internal_error()
        }
    }
}
