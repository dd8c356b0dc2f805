use strand::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::Other(302).as_u16(), 302);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::Other(503).reason_phrase(), "");
}

#[test]
fn test_status_code_from_u16() {
    for code in [200, 201, 400, 404, 500, 204, 503] {
        assert_eq!(StatusCode::from_u16(code).as_u16(), code);
    }
    assert_eq!(StatusCode::from_u16(404), StatusCode::NotFound);
    assert_eq!(StatusCode::from_u16(204), StatusCode::Other(204));
}

#[test]
fn test_response_builder_without_body_has_no_length() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_none());
    assert!(response.headers.is_empty());
}

#[test]
fn test_response_builder_body_sets_length_and_type() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"This is the body".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
    assert_eq!(
        response.header("Content-Type"),
        Some("application/octet-stream")
    );
}

#[test]
fn test_response_builder_keeps_explicit_content_type() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .header("X-Custom", "value")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("X-Custom"), Some("value"));
    assert_eq!(response.headers.len(), 3);
}

#[test]
fn test_response_builder_overrides_stale_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("4"));
}

#[test]
fn test_response_builder_empty_body_is_present() {
    let response = ResponseBuilder::new(StatusCode::Ok).body(Vec::new()).build();

    assert_eq!(response.body.as_deref(), Some(&b""[..]));
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_response_helpers_are_bodiless() {
    let cases = [
        (Response::ok(), StatusCode::Ok),
        (Response::created(), StatusCode::Created),
        (Response::bad_request(), StatusCode::BadRequest),
        (Response::not_found(), StatusCode::NotFound),
        (Response::internal_error(), StatusCode::InternalServerError),
    ];

    for (response, status) in cases {
        assert_eq!(response.status, status);
        assert!(response.body.is_none());
        assert!(response.headers.is_empty());
    }
}

#[test]
fn test_response_with_text_body() {
    let response = Response::ok().with_text_body("abc");

    assert_eq!(response.body.as_deref(), Some(&b"abc"[..]));
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Length"), Some("3"));
}

#[test]
fn test_response_with_body_replaces_previous_body() {
    let response = Response::ok()
        .with_text_body("first")
        .with_body(vec![1, 2], "application/octet-stream");

    assert_eq!(response.body, Some(vec![1, 2]));
    assert_eq!(response.header("Content-Length"), Some("2"));
    assert_eq!(
        response.header("Content-Type"),
        Some("application/octet-stream")
    );
}
