//! notekeep-api - HTTP surface for the notekeep service.
//!
//! | Method | Path | |
//! |--------|------|-|
//! | GET | `/` | plain-text liveness acknowledgment |
//! | POST | `/api/notes` | create a note |
//! | GET | `/api/notes` | list every note |

pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use notekeep_db::StorageGateway;

pub use config::ServerConfig;
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and never reassigned.
    pub gateway: StorageGateway,
}

impl AppState {
    pub fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Cross-origin policy for the `/api` routes.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the full application router.
pub fn app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let api = Router::new()
        .route(
            "/notes",
            get(handlers::notes::list_notes).post(handlers::notes::create_note),
        )
        .layer(cors_layer(allowed_origins));

    Router::new()
        .route("/", get(handlers::home))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}
