//! Request IDs
//!
//! Every request carries an `x-request-id`, taken from the client or
//! generated. It is echoed in the response headers, attached to profile log
//! events and written into the body of error responses.

use axum::{
    extract::Request,
    http::{header::CONTENT_LENGTH, HeaderMap, HeaderName},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::error::ErrorResponse;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// The two tower-http layers that assign and echo the request ID.
pub struct RequestIdLayers {
    pub set: SetRequestIdLayer<MakeRequestUuid>,
    pub propagate: PropagateRequestIdLayer,
}

pub fn request_id_layers() -> RequestIdLayers {
    RequestIdLayers {
        set: SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid),
        propagate: PropagateRequestIdLayer::new(X_REQUEST_ID),
    }
}

pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}

/// Re-renders API error bodies with the request ID of the request that
/// produced them. Must sit inside the layer that assigns the ID.
pub async fn stamp_error_responses(request: Request, next: Next) -> Response {
    let request_id = request.headers().request_id().map(str::to_string);
    let mut response = next.run(request).await;

    let Some(mut body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };
    if request_id.is_none() {
        return response;
    }
    body.request_id = request_id;

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let (_, rendered) = Json(body).into_response().into_parts();
    Response::from_parts(parts, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_id_read_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.request_id(), None);

        headers.insert(X_REQUEST_ID, HeaderValue::from_static("req-42"));
        assert_eq!(headers.request_id(), Some("req-42"));
    }
}
