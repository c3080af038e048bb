//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`auth`] - 认证相关接口
//! - [`accommodations`] - 住宿与房型管理接口
//! - [`rooms`] - 房型管理接口
//! - [`tickets`] - 门票管理接口
//! - [`reservations`] - 预订管理接口
//! - [`sales`] - 销售记录接口
//! - [`staff`] - 员工账号管理接口 (管理员)
//! - [`dashboard`] - 经营看板接口

pub mod convert;

pub mod auth;
pub mod health;

// Data models API
pub mod accommodations;
pub mod dashboard;
pub mod reservations;
pub mod rooms;
pub mod sales;
pub mod staff;
pub mod tickets;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Auth API - login is public, /me requires authentication
        .merge(auth::router())
        // Catalog API - authentication required
        .merge(accommodations::router())
        .merge(rooms::router())
        .merge(tickets::router())
        // Bookings & Sales API - authentication required
        .merge(reservations::router())
        .merge(sales::router())
        // Admin API - admin permission required
        .merge(staff::router())
        // Dashboard API - authentication required
        .merge(dashboard::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - executes before routes, injects CurrentUser
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
