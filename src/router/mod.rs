//! Request routing.
//!
//! Dispatch looks only at the first path segment:
//!
//! | First segment | Response                                   |
//! |---------------|--------------------------------------------|
//! | *(none)*      | 200, empty body                            |
//! | `user-agent`  | 200, the `User-Agent` header               |
//! | `echo`        | 200, the second segment                    |
//! | `files`       | read (GET) or write (anything else) a file |
//! | anything else | 404, empty body                            |
//!
//! The method is only consulted on the `files` route.

pub mod files;

use crate::http::path::PathSegments;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// The behavior selected by a request's first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    UserAgent,
    Echo,
    Files,
    NotFound,
}

impl Route {
    pub fn resolve(segments: &PathSegments) -> Self {
        match segments.first() {
            None => Route::Root,
            Some("user-agent") => Route::UserAgent,
            Some("echo") => Route::Echo,
            Some("files") => Route::Files,
            Some(_) => Route::NotFound,
        }
    }
}

/// Maps requests to responses. Holds the file-serving root, fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct Router {
    directory: Option<String>,
}

impl Router {
    pub fn new(directory: Option<String>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    /// Splits the request path and routes it.
    pub async fn handle(&self, req: &Request) -> Response {
        let segments = PathSegments::parse(&req.path);
        let response = self.route(req, &segments).await;

        tracing::info!(
            method = %req.method,
            path = %req.path,
            status = response.status.as_u16(),
            length = response.body.len(),
            "Handled request"
        );

        response
    }

    pub async fn route(&self, req: &Request, segments: &PathSegments) -> Response {
        match Route::resolve(segments) {
            Route::Root => Response::text(""),
            Route::UserAgent => Response::text(req.user_agent()),
            Route::Echo => Response::text(segments.get_or_empty(1)),
            Route::Files => self.serve_file(req, segments.get_or_empty(1)).await,
            Route::NotFound => Response::not_found(),
        }
    }

    async fn serve_file(&self, req: &Request, name: &str) -> Response {
        let path = match files::resolve(self.directory(), name) {
            Ok(path) => path,
            Err(reason) => {
                tracing::warn!(name, ?reason, "Rejected file name");
                return Response::empty(StatusCode::BadRequest);
            }
        };

        if req.is_get() {
            match files::read_file(&path).await {
                Ok(Some(contents)) => Response::octet_stream(contents),
                Ok(None) => Response::not_found(),
                Err(e) => {
                    tracing::warn!(error = %e, "File read failed");
                    Response::not_found()
                }
            }
        } else {
            match files::write_file(&path, &req.body).await {
                Ok(()) => Response::empty(StatusCode::Created),
                Err(e) => {
                    tracing::error!(error = %e, "File write failed");
                    Response::empty(StatusCode::InternalServerError)
                }
            }
        }
    }
}
