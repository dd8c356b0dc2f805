//! Strand - minimal HTTP/1.1 file server
//!
//! Core library: wire decoding and encoding, routing, and the
//! per-connection request pipeline.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
