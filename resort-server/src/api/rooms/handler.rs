//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::RoomUpdate;
use crate::db::repository::RoomRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_non_negative, validate_positive, validate_required_text,
};
use shared::models::Room as SharedRoom;

/// PUT /api/rooms/:id - 更新房型
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<SharedRoom>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(capacity) = payload.capacity {
        validate_positive(capacity, "capacity")?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "price")?;
    }

    let repo = RoomRepository::new(state.db.clone());
    let room = repo.update(&id, payload).await?;
    Ok(Json(room.into()))
}

/// DELETE /api/rooms/:id - 删除房型
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoomRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
