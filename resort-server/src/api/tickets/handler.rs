//! Ticket API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{TicketCreate, TicketUpdate};
use crate::db::repository::TicketRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, validate_non_negative, validate_required_text};
use shared::models::Ticket as SharedTicket;

/// GET /api/tickets - 获取所有门票
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedTicket>>> {
    let repo = TicketRepository::new(state.db.clone());
    let tickets = repo.find_all().await?;
    Ok(Json(tickets.into_iter().map(|t| t.into()).collect()))
}

/// GET /api/tickets/:id - 获取单个门票
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SharedTicket>> {
    let repo = TicketRepository::new(state.db.clone());
    let ticket = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Ticket {} not found", id)))?;
    Ok(Json(ticket.into()))
}

/// POST /api/tickets - 创建门票
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TicketCreate>,
) -> AppResult<Json<SharedTicket>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_non_negative(payload.price, "price")?;

    let repo = TicketRepository::new(state.db.clone());
    let ticket = repo.create(payload).await?;
    Ok(Json(ticket.into()))
}

/// PUT /api/tickets/:id - 更新门票
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TicketUpdate>,
) -> AppResult<Json<SharedTicket>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "price")?;
    }

    let repo = TicketRepository::new(state.db.clone());
    let ticket = repo.update(&id, payload).await?;
    Ok(Json(ticket.into()))
}

/// DELETE /api/tickets/:id - 删除门票 (解除预订关联)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = TicketRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
