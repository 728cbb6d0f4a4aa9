use std::fmt;

use crate::http::request::{Method, Request};

/// Longest method token accepted, in bytes.
pub const MAX_METHOD_LEN: usize = 7;
/// Longest path token accepted, in bytes.
pub const MAX_PATH_LEN: usize = 1023;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingMethod,
    MissingPath,
    MethodTooLong(usize),
    PathTooLong(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingMethod => write!(f, "request has no method"),
            ParseError::MissingPath => write!(f, "request has no path"),
            ParseError::MethodTooLong(n) => {
                write!(f, "method is {n} bytes, limit is {MAX_METHOD_LEN}")
            }
            ParseError::PathTooLong(n) => {
                write!(f, "path is {n} bytes, limit is {MAX_PATH_LEN}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts method and path from raw request bytes.
///
/// The first two ASCII-whitespace-delimited tokens are taken, wherever they
/// fall; everything after them is ignored. Tokens are kept as bytes, so
/// no encoding is required of them.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let mut tokens = buf
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    let method = tokens.next().ok_or(ParseError::MissingMethod)?;
    if method.len() > MAX_METHOD_LEN {
        return Err(ParseError::MethodTooLong(method.len()));
    }

    let path = tokens.next().ok_or(ParseError::MissingPath)?;
    if path.len() > MAX_PATH_LEN {
        return Err(ParseError::PathTooLong(path.len()));
    }

    Ok(Request::new(Method::parse(method), path))
}
