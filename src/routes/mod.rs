//! Request routing
//!
//! This module maps `(verb, path prefix)` pairs onto endpoint behavior.
//! The table is assembled once at startup and then shared read-only by
//! every connection task.

pub mod handlers;
pub mod table;

use std::path::PathBuf;

use crate::http::request::Method;

pub use handlers::{Endpoint, Storage};
pub use table::{Route, RouteTable};

/// Builds the server's route table with file endpoints rooted at `storage_dir`.
///
/// | Verb | Prefix        | Endpoint    |
/// |------|---------------|-------------|
/// | GET  | `/` (exact)   | `Root`      |
/// | GET  | `/echo`       | `Echo`      |
/// | GET  | `/user-agent` | `UserAgent` |
/// | GET  | `/files`      | `ReadFile`  |
/// | POST | `/files`      | `WriteFile` |
pub fn default_routes(storage_dir: impl Into<PathBuf>) -> RouteTable {
    let storage = Storage::new(storage_dir);
    let mut table = RouteTable::new();

    table
        .register(Method::GET, "/", Endpoint::Root)
        .register(Method::GET, "/echo", Endpoint::Echo)
        .register(Method::GET, "/user-agent", Endpoint::UserAgent)
        .register(Method::GET, "/files", Endpoint::ReadFile(storage.clone()))
        .register(Method::POST, "/files", Endpoint::WriteFile(storage));

    table
}
