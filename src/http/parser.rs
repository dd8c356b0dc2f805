use crate::http::request::{Method, Request};
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Structural failures of a request head. Either one makes the request
/// malformed; there is no partial or retryable outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request: no status line")]
    MissingStatusLine,
    #[error("malformed request: status line has no path")]
    MissingPath,
}

const HEADERS_END: &[u8] = b"\r\n\r\n";

/// Decodes one request from a read buffer.
///
/// The buffer may carry NUL padding past the end of the request; it is
/// stripped before anything else happens. Only the body is trimmed at its
/// front. Header lines without a `": "` separator are skipped rather than
/// rejected.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let buf = trim_trailing_nul(buf);

    // Look for header/body separator
    let (head, body) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], Some(&buf[end + HEADERS_END.len()..])),
        None => (buf, None),
    };

    let head = String::from_utf8_lossy(head);
    let mut lines = head.split("\r\n");

    // Request line
    let mut parts = lines
        .next()
        .ok_or(ParseError::MissingStatusLine)?
        .split_whitespace();

    let method = parts.next().ok_or(ParseError::MissingStatusLine)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(": ") {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        headers,
        body: body.map(|b| Bytes::copy_from_slice(trim_nul(b))),
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADERS_END.len())
        .position(|w| w == HEADERS_END)
}

fn trim_trailing_nul(buf: &[u8]) -> &[u8] {
    let end = buf.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &buf[..end]
}

/// Strips NUL bytes from both ends of `buf`.
pub(crate) fn trim_nul(buf: &[u8]) -> &[u8] {
    let start = buf.iter().position(|&b| b != 0).unwrap_or(buf.len());
    let end = buf.iter().rposition(|&b| b != 0).map_or(start, |i| i + 1);
    &buf[start..end]
}
