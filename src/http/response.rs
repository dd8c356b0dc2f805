use std::collections::HashMap;

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File stored
/// - `BadRequest` (400): Missing path argument or required header
/// - `NotFound` (404): No route, or no such file
/// - `InternalServerError` (500): Storage failure
///
/// Any other numeric code can be carried through `Other`; it is written
/// with an empty reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// Any code outside the table above
    Other(u16),
}

impl StatusCode {
    /// Maps a numeric code onto the table, falling back to `Other`.
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            201 => StatusCode::Created,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            500 => StatusCode::InternalServerError,
            other => StatusCode::Other(other),
        }
    }

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use strand::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Other(418).as_u16(), 418);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::Other(code) => *code,
        }
    }

    /// Returns the reason phrase for this status code, or `""` for codes
    /// outside the table. `Other` carrying a tabled code gets that code's
    /// phrase.
    ///
    /// # Example
    ///
    /// ```
    /// # use strand::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::Other(404).reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::Other(418).reason_phrase(), "");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::Other(code) => match StatusCode::from_u16(*code) {
                StatusCode::Other(_) => "",
                known => known.reason_phrase(),
            },
        }
    }
}

/// Represents a complete HTTP response ready to be encoded.
///
/// Whenever `body` is `Some`, `headers` holds `Content-Length` and
/// `Content-Type`.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Response body, if any
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use strand::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.headers["Content-Length"], "2");
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Attaches a body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// With a body attached, `Content-Length` is always set to the body size
    /// and `Content-Type` defaults to `application/octet-stream`.
    pub fn build(mut self) -> Response {
        if let Some(body) = &self.body {
            self.headers
                .insert("Content-Length".to_string(), body.len().to_string());
            self.headers
                .entry("Content-Type".to_string())
                .or_insert_with(|| "application/octet-stream".to_string());
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a bodiless response with the given status.
    pub fn new(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates a bodiless 200 OK response.
    pub fn ok() -> Self {
        Self::new(StatusCode::Ok)
    }

    /// Creates a bodiless 201 Created response.
    pub fn created() -> Self {
        Self::new(StatusCode::Created)
    }

    /// Creates a bodiless 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest)
    }

    /// Creates a bodiless 404 Not Found response.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    /// Creates a bodiless 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError)
    }

    /// Replaces the body, keeping the status and any other headers.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>, content_type: &str) -> Self {
        let body = body.into();
        self.headers
            .insert("Content-Length".to_string(), body.len().to_string());
        self.headers
            .insert("Content-Type".to_string(), content_type.to_string());
        self.body = Some(body);
        self
    }

    /// Replaces the body with `text` served as `text/plain`.
    pub fn with_text_body(self, text: impl Into<String>) -> Self {
        self.with_body(text.into().into_bytes(), "text/plain")
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
