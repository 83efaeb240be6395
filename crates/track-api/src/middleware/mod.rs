//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, rate limiting, and timeouts.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use track_common::{AppError, CorsConfig, RateLimitConfig};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this answer 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headers the limiter sets on a rejection that survive the envelope rewrite
const RATE_LIMIT_HEADERS: [&str; 2] = ["retry-after", "x-ratelimit-after"];

/// Apply the global rate limit to `router`
pub fn apply_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, AppError> {
    // Global key: the limit is shared by all clients
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.into())
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(|| {
            AppError::Config("rate limit needs non-zero requests per second and burst".into())
        })?;

    Ok(router
        .layer(GovernorLayer {
            config: Arc::new(governor_conf),
        })
        .layer(map_response(rate_limited_envelope)))
}

/// Rewrite the limiter's plain-text 429 into the API envelope
async fn rate_limited_envelope(response: Response) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let mut limited = ApiError::from(AppError::RateLimitExceeded).into_response();
    for name in RATE_LIMIT_HEADERS {
        if let Some(value) = response.headers().get(name) {
            limited
                .headers_mut()
                .insert(HeaderName::from_static(name), value.clone());
        }
    }
    limited
}

/// Turn a timed-out or failed middleware future into an API error
pub(crate) async fn request_timeout(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::from(AppError::Timeout)
    } else {
        ApiError::internal(anyhow::Error::msg(err.to_string()))
    }
}

/// Apply request id, tracing, timeout and CORS layers
///
/// Layers wrap in reverse order, so requests pass
/// RequestID -> Trace -> Timeout -> CORS -> Handler. A timeout answers
/// 503 in the API envelope.
pub fn apply_middleware(router: Router<AppState>, cors_config: &CorsConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(create_cors_layer(cors_config))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(request_timeout))
                .timeout(REQUEST_TIMEOUT),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Create the CORS layer. Any origin is allowed unless origins are configured.
fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    if config.allowed_origins.is_empty() {
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}
