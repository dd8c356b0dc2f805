//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.1 server.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Decodes a read buffer into a [`request::Request`]
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Encodes responses and writes them to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read into a 1024-byte buffer, then decode
//!        └──────┬──────┘
//!               │ Request decoded
//!               ▼
//!        ┌──────────────────┐
//!        │     Parsed       │ ← Resolve a route
//!        └──────┬───────────┘
//!               │ Route chosen (or none → 404)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatched     │ ← Run the route's endpoint
//!        └──────┬───────────┘
//!               │ Response encoded
//!               ▼
//!        ┌──────────────────┐
//!        │   Responded      │ ← Write the encoded response
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! Each state is named for what the connection already holds: `Parsed`
//! carries the decoded request, `Dispatched` the chosen route, and
//! `Responded` the encoded response waiting to be written.
//!
//! Endpoints never fail: every problem they meet becomes a status code.
//! A read or write failure, a timeout, or an undecodable request ends the
//! machine with an error instead. Nothing is written for a read or decode
//! failure unless malformed requests are configured to get a 400; a write
//! failure may leave a partial response behind. The stream is closed
//! either way.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
