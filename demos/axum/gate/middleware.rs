use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use origin_gatekeeper::{Decision, Headers, PriorAuth, Rejection, RequestContext, constants};

use super::AppState;

pub async fn gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned = OwnedRequestContext::from_request(&request);
    let decision = state.gatekeeper.check(&owned.as_request_context());

    match decision {
        Decision::Blocked(rejection) | Decision::Forbidden(rejection) => {
            rejection_response(&rejection)
        }
        Decision::PreflightAccepted(preflight) => {
            let status =
                StatusCode::from_u16(preflight.status).unwrap_or(StatusCode::NO_CONTENT);
            let mut response = empty_response(status);
            apply_headers(response.headers_mut(), &preflight.headers);
            response
        }
        Decision::Allowed { headers, .. } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        Decision::PassThrough => next.run(request).await,
    }
}

fn rejection_response(rejection: &Rejection) -> Response {
    let status = StatusCode::from_u16(rejection.status()).unwrap_or(StatusCode::FORBIDDEN);
    match rejection.body_json() {
        Ok(json) => {
            let mut response = Response::new(Body::from(json));
            *response.status_mut() = status;
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            response
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize rejection body");
            empty_response(status)
        }
    }
}

fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    path: String,
    origin: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            path: request
                .uri()
                .path_and_query()
                .map(|value| value.as_str().to_string())
                .unwrap_or_else(|| request.uri().path().to_string()),
            origin: request
                .headers()
                .get(constants::header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string()),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            prior_auth: PriorAuth::Undecided,
        }
    }
}
