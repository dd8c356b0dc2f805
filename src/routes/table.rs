//! Ordered route table.
//!
//! A route matches when its verb equals the request method and its pattern
//! is either the exact path or, for any pattern other than `/`, a prefix of
//! it. The first match in registration order wins, so specific routes have
//! to be registered before general ones.
//!
//! A match that ends inside a path segment (`/files` against `/filesX/a`)
//! still resolves, but the route answers 404: the path is not in its
//! namespace.

use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::routes::handlers::Endpoint;

/// Binds a verb and a path pattern to an endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    pub verb: Method,
    pub pattern: String,
    pub endpoint: Endpoint,
}

impl Route {
    pub fn new(verb: Method, pattern: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            verb,
            pattern: pattern.into(),
            endpoint,
        }
    }

    pub fn matches(&self, method: &Method, path: &str) -> bool {
        if self.verb != *method {
            return false;
        }

        self.pattern == path || (self.pattern != "/" && path.starts_with(&self.pattern))
    }

    /// Splits off the non-empty path components that follow the pattern.
    /// `None` when the pattern ends partway through a segment of `path`.
    pub fn argument<'a>(&self, path: &'a str) -> Option<Vec<&'a str>> {
        let rest = path.strip_prefix(self.pattern.as_str())?;
        if !self.pattern.ends_with('/') && !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        Some(rest.split('/').filter(|s| !s.is_empty()).collect())
    }

    /// Runs the endpoint on `req`.
    pub async fn handle(&self, req: &Request) -> Response {
        match self.argument(&req.path) {
            Some(argument) => self.endpoint.handle(req, &argument).await,
            None => Response::not_found(),
        }
    }
}

/// Routes in priority order. Filled at startup, then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route; it has lower priority than everything registered
    /// before it.
    pub fn register(
        &mut self,
        verb: Method,
        pattern: impl Into<String>,
        endpoint: Endpoint,
    ) -> &mut Self {
        self.routes.push(Route::new(verb, pattern, endpoint));
        self
    }

    /// Returns the first route matching `req`, or `None` when the request
    /// should be answered with 404.
    pub fn resolve(&self, req: &Request) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.matches(&req.method, &req.path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_pattern_is_exact_only() {
        let route = Route::new(Method::GET, "/", Endpoint::Root);

        assert!(route.matches(&Method::GET, "/"));
        assert!(!route.matches(&Method::GET, "/anything"));
    }

    #[test]
    fn prefix_pattern_owns_sub_paths() {
        let route = Route::new(Method::GET, "/echo", Endpoint::Echo);

        assert!(route.matches(&Method::GET, "/echo"));
        assert!(route.matches(&Method::GET, "/echo/abc/def"));
        assert!(!route.matches(&Method::POST, "/echo/abc"));
        assert!(!route.matches(&Method::GET, "/ech"));
    }

    #[test]
    fn argument_follows_pattern() {
        let route = Route::new(Method::GET, "/files", Endpoint::Echo);

        assert_eq!(route.argument("/files/a/b.txt"), Some(vec!["a", "b.txt"]));
        assert_eq!(route.argument("/files//a/"), Some(vec!["a"]));
        assert_eq!(route.argument("/files"), Some(vec![]));
        assert_eq!(route.argument("/filesX/a.txt"), None);

        let root = Route::new(Method::GET, "/", Endpoint::Root);
        assert_eq!(root.argument("/"), Some(vec![]));
    }
}
