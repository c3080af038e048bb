//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::ReservationStatus;

use crate::core::ServerState;
use crate::db::models::{ReservationCreate, ReservationUpdate};
use crate::db::repository::ReservationRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use shared::models::Reservation as SharedReservation;

/// 列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 起始日期 (含)，YYYY-MM-DD
    pub from: Option<String>,
    /// 结束日期 (含)，YYYY-MM-DD
    pub to: Option<String>,
    /// 排序字段: date | reservation_type
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// 排序方向: asc | desc
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_sort_by() -> String {
    "reservation_type".to_string()
}

fn default_order() -> String {
    "asc".to_string()
}

/// 状态变更请求体
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ReservationStatus,
}

/// GET /api/reservations - 按日期范围查询预订
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SharedReservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservations = repo
        .find_range(
            query.from.as_deref(),
            query.to.as_deref(),
            &query.sort_by,
            &query.order,
        )
        .await?;
    Ok(Json(reservations.into_iter().map(|r| r.into()).collect()))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedReservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_row_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation.into()))
}

/// POST /api/reservations - 创建预订 (余额由服务端计算)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<SharedReservation>> {
    validate_payload_text(
        &payload.customer_name,
        &payload.phone,
        &payload.pickup_location,
        &payload.pickup_time,
        &payload.notes,
    )?;

    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.create(payload).await?;
    Ok(Json(reservation.into()))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<SharedReservation>> {
    if let Some(ref customer_name) = payload.customer_name {
        validate_required_text(customer_name, "customer_name", MAX_NAME_LEN)?;
    }
    // 双层 Option：只校验实际携带的值，null (清空) 不需要校验
    validate_optional_text(&payload.phone.clone().flatten(), "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &payload.pickup_location.clone().flatten(),
        "pickup_location",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_optional_text(
        &payload.pickup_time.clone().flatten(),
        "pickup_time",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_optional_text(&payload.notes.clone().flatten(), "notes", MAX_NOTE_LEN)?;

    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.update(&id, payload).await?;
    Ok(Json(reservation.into()))
}

/// PUT /api/reservations/:id/status - 预订状态变更
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<SharedReservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.update_status(&id, payload.status).await?;
    Ok(Json(reservation.into()))
}

/// DELETE /api/reservations/:id - 删除预订 (解除销售关联)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ReservationRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

fn validate_payload_text(
    customer_name: &str,
    phone: &Option<String>,
    pickup_location: &Option<String>,
    pickup_time: &Option<String>,
    notes: &Option<String>,
) -> AppResult<()> {
    validate_required_text(customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(pickup_location, "pickup_location", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(pickup_time, "pickup_time", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}
