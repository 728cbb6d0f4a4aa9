//! Whole-file reads for GET responses.
//!
//! Each request opens the file, sizes a buffer from its metadata, reads it
//! completely and closes it before the response is written. Nothing is
//! streamed; a file is always held in memory in full.

use std::fmt;
use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::http::mime;
use crate::http::response::Response;

/// Allocates an empty buffer able to hold `size` bytes without growing.
///
/// Returns `None` when the size does not fit in memory.
pub fn allocate(size: u64) -> Option<Vec<u8>> {
    let size = usize::try_from(size).ok()?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).ok()?;
    Some(buf)
}

#[derive(Debug)]
enum ServeError {
    Open(io::Error),
    IsDirectory,
    Alloc(u64),
    Read(io::Error),
    ShortRead { expected: u64, actual: usize },
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::Open(e) => write!(f, "open failed: {e}"),
            ServeError::IsDirectory => write!(f, "path is a directory"),
            ServeError::Alloc(size) => write!(f, "cannot allocate {size} bytes"),
            ServeError::Read(e) => write!(f, "read failed: {e}"),
            ServeError::ShortRead { expected, actual } => {
                write!(f, "short read: got {actual} of {expected} bytes")
            }
        }
    }
}

impl ServeError {
    fn response(&self) -> Response {
        match self {
            ServeError::Alloc(_) => Response::internal_error(),
            _ => Response::not_found(),
        }
    }
}

/// Serves the file at `path`, producing 200, 404 or 500.
pub async fn serve(path: &Path) -> Response {
    match read_file(path).await {
        Ok(contents) => {
            let content_type = mime::resolve(&path.to_string_lossy());
            tracing::debug!(
                path = %path.display(),
                bytes = contents.len(),
                content_type,
                "File read"
            );
            Response::ok(content_type, contents)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to serve file");
            e.response()
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, ServeError> {
    let file = File::open(path).await.map_err(ServeError::Open)?;

    let meta = file.metadata().await.map_err(ServeError::Open)?;
    if meta.is_dir() {
        return Err(ServeError::IsDirectory);
    }

    let size = meta.len();
    let mut buf = allocate(size).ok_or(ServeError::Alloc(size))?;

    // Bounded so a file that grows mid-read cannot outgrow the buffer.
    let read = file
        .take(size)
        .read_to_end(&mut buf)
        .await
        .map_err(ServeError::Read)?;

    if read as u64 != size {
        return Err(ServeError::ShortRead {
            expected: size,
            actual: read,
        });
    }

    Ok(buf)
}
