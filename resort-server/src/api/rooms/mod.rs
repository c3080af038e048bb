//! Room API 模块
//!
//! 房型的创建与列表挂在 `/api/accommodations/{id}/rooms` 下，
//! 这里只提供按 ID 的更新与删除。

mod handler;

use axum::{Router, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rooms", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/{id}", put(handler::update).delete(handler::delete))
}
