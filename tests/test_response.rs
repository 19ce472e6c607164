use httpcraft::http::response::{OCTET_STREAM, Response, ResponseBuilder, StatusCode, TEXT_PLAIN};
use httpcraft::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NoContent.as_u16(), 204);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::Other(302).as_u16(), 302);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::NoContent.reason_phrase(), "No Content");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::Other(405).reason_phrase(), "Unknown Status");
}

#[test]
fn test_status_code_from_u16() {
    assert_eq!(StatusCode::from_u16(201), StatusCode::Created);
    assert_eq!(StatusCode::from_u16(500), StatusCode::InternalServerError);
    assert_eq!(StatusCode::from_u16(405), StatusCode::Other(405));
}

#[test]
fn test_response_builder_defaults_to_text_plain() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.content_type, TEXT_PLAIN);
    assert!(response.body.is_empty());
}

#[test]
fn test_response_helpers() {
    let text = Response::text("hi");
    assert_eq!(text.status, StatusCode::Ok);
    assert_eq!(text.content_type, TEXT_PLAIN);

    let file = Response::octet_stream(vec![1, 2, 3]);
    assert_eq!(file.content_type, OCTET_STREAM);
    assert_eq!(file.content_length(), 3);

    let missing = Response::not_found();
    assert_eq!(missing.status, StatusCode::NotFound);
    assert!(missing.body.is_empty());
}

#[test]
fn test_serialize_echo_response() {
    let bytes = serialize_response(&Response::text("abc123"));

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123".to_vec()
    );
}

#[test]
fn test_serialize_empty_response() {
    let bytes = serialize_response(&Response::text(""));

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_content_length_counts_bytes() {
    // "héllo" is five characters but six bytes
    let bytes = serialize_response(&Response::text("héllo"));
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains("Content-Length: 6\r\n"));
    assert!(text.ends_with("\r\n\r\nhéllo"));
}

#[test]
fn test_serialize_emits_only_two_headers() {
    let bytes = serialize_response(&Response::empty(StatusCode::Created));
    let text = String::from_utf8(bytes).unwrap();
    let head = text.split("\r\n\r\n").next().unwrap();

    assert_eq!(
        head.lines().collect::<Vec<_>>(),
        vec![
            "HTTP/1.1 201 Created",
            "Content-Type: text/plain",
            "Content-Length: 0",
        ]
    );
}

#[test]
fn test_serialize_binary_body() {
    let bytes = serialize_response(&Response::octet_stream(vec![0u8, 0xff, b'\n']));

    assert!(bytes.ends_with(b"Content-Length: 3\r\n\r\n\x00\xff\n"));
}
