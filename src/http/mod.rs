//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve files: one GET per connection, every
//! response closes the connection.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine (read, process, write)
//! - **`parser`**: Pulls method and path out of the raw request bytes
//! - **`request`**: Method and path, plus base-directory resolution
//! - **`response`**: Status codes, content type and body
//! - **`writer`**: Frames a response as header block plus body
//! - **`files`**: Reads a whole file into a 200, or picks the error page
//! - **`mime`**: Content type from file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of up to 4096 bytes
//!        └──────┬──────┘
//!               │ Request line parsed      (nothing read → Closed,
//!               ▼                            bad request line → Writing 400)
//!        ┌──────────────────┐
//!        │   Processing     │ ← 405, or read the file
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Header block, then body
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use staticd::config::Config;
//! use staticd::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, &cfg);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod files;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
