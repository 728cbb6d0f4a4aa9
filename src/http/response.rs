/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File found and read
/// - `BadRequest` (400): Request line could not be parsed
/// - `NotFound` (404): File missing or unreadable
/// - `MethodNotAllowed` (405): Anything other than GET
/// - `InternalServerError` (500): File buffer could not be allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Code and reason together, as they follow `HTTP/1.1 ` on the wire.
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.status_line(), "404 Not Found");
    /// ```
    pub fn status_line(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// A complete response: status, content type and body.
///
/// `Content-Length` and `Connection: close` are derived when the response
/// is written, so the length always matches the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Creates a 200 OK response with the given content type and body.
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::Ok, content_type, body)
    }

    /// Creates an HTML error page of the form `<h1>404 Not Found</h1>`.
    pub fn error_page(status: StatusCode) -> Self {
        let body = format!("<h1>{}</h1>", status.status_line());
        Self::new(status, "text/html", body)
    }

    pub fn bad_request() -> Self {
        Self::error_page(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::error_page(StatusCode::NotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::error_page(StatusCode::MethodNotAllowed)
    }

    pub fn internal_error() -> Self {
        Self::error_page(StatusCode::InternalServerError)
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
