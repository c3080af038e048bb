//! Sale API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::SaleCreate;
use crate::db::repository::SaleRepository;
use crate::utils::AppResult;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date};
use crate::utils::validation::{MAX_NAME_LEN, validate_non_negative, validate_required_text};
use shared::models::Sale as SharedSale;

/// 列表查询参数 — 营业时区的日历日窗口
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 起始日期 (含)，YYYY-MM-DD
    pub from: Option<String>,
    /// 结束日期 (含)，YYYY-MM-DD
    pub to: Option<String>,
}

/// GET /api/sales - 按日期范围查询销售记录 (新→旧)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SharedSale>>> {
    let tz = state.config.timezone;
    let start = match query.from.as_deref() {
        Some(from) => Some(day_start_millis(parse_date(from)?, tz)),
        None => None,
    };
    let end = match query.to.as_deref() {
        Some(to) => Some(day_end_millis(parse_date(to)?, tz)),
        None => None,
    };

    let repo = SaleRepository::new(state.db.clone());
    let sales = repo.find_range(start, end).await?;
    Ok(Json(sales.into_iter().map(|s| s.into()).collect()))
}

/// POST /api/sales - 记录销售
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<SharedSale>> {
    validate_required_text(&payload.item_name, "item_name", MAX_NAME_LEN)?;
    validate_non_negative(payload.amount, "amount")?;

    let repo = SaleRepository::new(state.db.clone());
    let sale = repo.create(payload).await?;
    Ok(Json(sale.into()))
}

/// DELETE /api/sales/:id - 删除销售记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = SaleRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
