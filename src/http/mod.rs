//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! keep-alive, no chunked bodies.
//!
//! - **`parser`**: turns the bytes of one read into a [`request::Request`]
//! - **`path`**: splits the request path into segments
//! - **`request`**: HTTP request representation
//! - **`response`**: status codes and the response type with its builder
//! - **`writer`**: serializes and writes responses to the client
//! - **`connection`**: drives a single accepted connection
//!
//! # Connection lifecycle
//!
//! ```text
//!   read once ──▶ parse ──▶ route ──▶ write ──▶ close
//! ```
//!
//! # Example
//!
//! ```
//! use httpcraft::http::{parser::parse_request, writer::serialize_response};
//! use httpcraft::router::Router;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let req = parse_request(b"GET /echo/abc123 HTTP/1.1\r\nHost: x\r\n\r\n");
//! let resp = Router::new(None).handle(&req).await;
//! assert_eq!(
//!     serialize_response(&resp),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123"
//! );
//! # });
//! ```

pub mod connection;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
