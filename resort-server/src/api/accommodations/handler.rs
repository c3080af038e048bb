//! Accommodation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{AccommodationCreate, AccommodationUpdate, RoomCreate};
use crate::db::repository::{AccommodationRepository, RoomRepository};
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_optional_text,
    validate_positive, validate_required_text,
};
use shared::models::{Accommodation as SharedAccommodation, Room as SharedRoom};

/// GET /api/accommodations - 获取所有住宿
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedAccommodation>>> {
    let repo = AccommodationRepository::new(state.db.clone());
    let accommodations = repo.find_all().await?;
    Ok(Json(accommodations.into_iter().map(|a| a.into()).collect()))
}

/// GET /api/accommodations/:id - 获取单个住宿
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedAccommodation>> {
    let repo = AccommodationRepository::new(state.db.clone());
    let accommodation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Accommodation {} not found", id)))?;
    Ok(Json(accommodation.into()))
}

/// POST /api/accommodations - 创建住宿
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccommodationCreate>,
) -> AppResult<Json<SharedAccommodation>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.details, "details", MAX_NOTE_LEN)?;

    let repo = AccommodationRepository::new(state.db.clone());
    let accommodation = repo.create(payload).await?;
    Ok(Json(accommodation.into()))
}

/// PUT /api/accommodations/:id - 更新住宿
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AccommodationUpdate>,
) -> AppResult<Json<SharedAccommodation>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.details, "details", MAX_NOTE_LEN)?;

    let repo = AccommodationRepository::new(state.db.clone());
    let accommodation = repo.update(&id, payload).await?;
    Ok(Json(accommodation.into()))
}

/// DELETE /api/accommodations/:id - 删除住宿 (级联删除房型、解除预订关联)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AccommodationRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

/// GET /api/accommodations/:id/rooms - 获取住宿的所有房型
pub async fn list_rooms(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<SharedRoom>>> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = repo.find_by_accommodation(&id).await?;
    Ok(Json(rooms.into_iter().map(|r| r.into()).collect()))
}

/// POST /api/accommodations/:id/rooms - 为住宿创建房型
pub async fn create_room(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<SharedRoom>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_positive(payload.capacity, "capacity")?;
    validate_non_negative(payload.price, "price")?;

    let repo = RoomRepository::new(state.db.clone());
    let room = repo.create(&id, payload).await?;
    Ok(Json(room.into()))
}
