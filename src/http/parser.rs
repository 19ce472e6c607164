use crate::http::request::Request;
use std::collections::HashMap;

/// Parses the bytes received on a connection into a [`Request`].
///
/// Parsing never fails. A missing or short request line leaves `method` and
/// `path` empty, header lines without a colon are skipped, and whatever
/// follows the blank line is the body. There is no `Content-Length` framing.
pub fn parse_request(buf: &[u8]) -> Request {
    let mut request = Request::default();
    let mut lines = Lines::new(buf);

    // Request line
    if let Some(line) = lines.next() {
        let line = String::from_utf8_lossy(line);
        let mut parts = line.split_whitespace();
        request.method = parts.next().unwrap_or_default().to_string();
        request.path = parts.next().unwrap_or_default().to_string();
        request.version = parts.next().unwrap_or_default().to_string();
    }

    // Headers
    let mut headers = HashMap::new();
    let mut terminated = false;

    for line in lines.by_ref() {
        if line.is_empty() || line == b"\r" {
            terminated = true;
            break;
        }

        let line = String::from_utf8_lossy(line);
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.to_string(), trim_header_value(value).to_string());
        }
    }
    request.headers = headers;

    // Body
    if terminated {
        let rest = lines.remainder();
        let rest = rest.strip_suffix(b"\n").unwrap_or(rest);
        request.body = rest.to_vec();
    }

    request
}

fn trim_header_value(value: &str) -> &str {
    value
        .trim_start_matches([' ', '\t'])
        .trim_end_matches([' ', '\t', '\r'])
}

/// Splits on `\n` without allocating, remembering where it stopped.
struct Lines<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remainder(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }

        let rest = &self.buf[self.pos..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                self.pos += i + 1;
                Some(&rest[..i])
            }
            None => {
                self.pos = self.buf.len();
                Some(rest)
            }
        }
    }
}
