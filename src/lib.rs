//! staticd - a minimal HTTP/1.1 file server
//!
//! Serves files from one directory over plain HTTP, one connection at a time.

pub mod config;
pub mod http;
pub mod server;
