//! Dashboard API Handlers
//!
//! 日/周/月经营汇总：销售总额、交易笔数、平均客单价、有效预订数，
//! 以及按营业时区日历日分桶的销售趋势。

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{ReservationRepository, SaleRepository};
use crate::utils::AppResult;
use crate::utils::time::{
    day_end_millis, day_start_millis, millis_to_date, month_bounds, parse_date, today_in,
    week_bounds,
};

/// 汇总窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Daily,
    Weekly,
    Monthly,
}

/// 查询参数 — date 缺省为营业时区的今天
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default = "default_view")]
    pub view: DashboardView,
    pub date: Option<String>,
}

fn default_view() -> DashboardView {
    DashboardView::Daily
}

/// 趋势数据点 (每日一桶)
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub total: Decimal,
}

/// 汇总响应
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub view: DashboardView,
    /// 窗口起始日期 (含)
    pub start_date: String,
    /// 窗口结束日期 (含)
    pub end_date: String,
    pub total_sales: Decimal,
    pub transaction_count: u64,
    pub average_sale: Decimal,
    /// 窗口内未取消的预订数
    pub reservation_count: u64,
    pub trend: Vec<TrendPoint>,
}

/// GET /api/dashboard - 经营汇总
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let tz = state.config.timezone;
    let reference = match query.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => today_in(tz),
    };

    let (start, end) = match query.view {
        DashboardView::Daily => (reference, reference),
        DashboardView::Weekly => week_bounds(reference),
        DashboardView::Monthly => month_bounds(reference),
    };

    let window_start = day_start_millis(start, tz);
    let window_end = day_end_millis(end, tz);

    let sale_repo = SaleRepository::new(state.db.clone());
    let sales = sale_repo.find_in_window(window_start, window_end).await?;

    let reservation_repo = ReservationRepository::new(state.db.clone());
    let reservation_count = reservation_repo
        .count_in_range(&start.format("%Y-%m-%d").to_string(), &end.format("%Y-%m-%d").to_string())
        .await?;

    // 聚合在 Rust 侧完成，金额用 Decimal 精确累加
    let total_sales: Decimal = sales.iter().map(|s| s.amount).sum();
    let transaction_count = sales.len() as u64;
    let average_sale = if transaction_count == 0 {
        Decimal::ZERO
    } else {
        (total_sales / Decimal::from(transaction_count)).round_dp(2)
    };

    // 窗口内每一天都占一个桶，没有销售的日子计 0
    let mut buckets: BTreeMap<NaiveDate, Decimal> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| (d, Decimal::ZERO))
        .collect();
    for sale in &sales {
        let day = millis_to_date(sale.created_at, tz);
        if let Some(total) = buckets.get_mut(&day) {
            *total += sale.amount;
        }
    }
    let trend = buckets
        .into_iter()
        .map(|(date, total)| TrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            total,
        })
        .collect();

    Ok(Json(DashboardResponse {
        view: query.view,
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
        total_sales,
        transaction_count,
        average_sale,
        reservation_count,
        trend,
    }))
}
