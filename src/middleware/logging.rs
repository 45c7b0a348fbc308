use axum::extract::Request;
use tracing::{Span, info_span};
use uuid::Uuid;

pub fn make_log_span(request: &Request) -> Span {
    info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = ?request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}
