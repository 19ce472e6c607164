//! httpcraft - a small HTTP/1.1 server
//!
//! One request per connection, four routes, and an optional directory
//! served under `/files`.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
