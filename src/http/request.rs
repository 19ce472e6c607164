use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Built once per connection by [`parse_request`](crate::http::parser::parse_request)
/// and never mutated afterwards. Missing request-line tokens leave the
/// corresponding fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method exactly as sent (e.g. "GET"), never validated
    pub method: String,
    /// The raw request target (e.g. "/echo/abc")
    pub path: String,
    /// HTTP version token, informational only
    pub version: String,
    /// Request headers; names are case-sensitive, values trimmed
    pub headers: HashMap<String, String>,
    /// Everything after the header section
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method.unwrap_or_else(|| "GET".to_string()),
            path: self.path.unwrap_or_else(|| "/".to_string()),
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Request {
    /// Retrieves a header value by its exact name.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpcraft::http::request::RequestBuilder;
    /// let req = RequestBuilder::new().header("User-Agent", "curl/8.0").build();
    /// assert_eq!(req.header("User-Agent"), Some("curl/8.0"));
    /// assert_eq!(req.header("user-agent"), None);
    /// ```
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The `User-Agent` header, or an empty string when absent.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }

    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
