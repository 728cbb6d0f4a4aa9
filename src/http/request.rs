use std::ffi::OsStr;
use std::fmt;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// HTTP request method, as far as the server cares.
///
/// Only `GET` is served. Every other token in method position, known
/// method or not, is answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other token, kept as raw bytes
    Other(Vec<u8>),
}

impl Method {
    /// Parses a method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::parse(b"GET"), Method::GET);
    /// assert_eq!(Method::parse(b"get"), Method::Other(b"get".to_vec()));
    /// ```
    pub fn parse(token: &[u8]) -> Self {
        match token {
            b"GET" => Method::GET,
            other => Method::Other(other.to_vec()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::Other(token) => f.write_str(&String::from_utf8_lossy(token)),
        }
    }
}

/// The two leading tokens of a request: method and path.
///
/// The path stays as raw bytes so file names that are not UTF-8 can still
/// be opened. Headers, version and body are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET or anything else)
    pub method: Method,
    /// The raw request path, e.g. "/index.html", query string included
    pub path: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// The path to look up on disk: `/` is served as `/index.html`.
    pub fn target(&self) -> &[u8] {
        if self.path == b"/" {
            &b"/index.html"[..]
        } else {
            &self.path[..]
        }
    }

    /// Joins the base directory and the target path byte for byte.
    ///
    /// No normalization happens here; `..` segments pass through untouched.
    pub fn resolve(&self, base_dir: &str) -> PathBuf {
        let mut joined = Vec::with_capacity(base_dir.len() + self.target().len());
        joined.extend_from_slice(base_dir.as_bytes());
        joined.extend_from_slice(self.target());
        PathBuf::from(OsStr::from_bytes(&joined))
    }

    /// Path for log output; invalid UTF-8 is replaced.
    pub fn display_path(&self) -> String {
        String::from_utf8_lossy(&self.path).into_owned()
    }
}
