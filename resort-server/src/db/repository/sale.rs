//! Sale Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Reservation, Sale, SaleCreate, SaleRow};
use crate::utils::time::now_millis;
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ROW_FIELDS: &str = "*, reservation.customer_name AS customer_name";

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find sales in a half-open `[start, end)` millisecond window, newest first
    pub async fn find_range(
        &self,
        start: Option<i64>,
        end: Option<i64>,
    ) -> RepoResult<Vec<SaleRow>> {
        let mut conditions = Vec::new();
        if start.is_some() {
            conditions.push("created_at >= $start");
        }
        if end.is_some() {
            conditions.push("created_at < $end");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM sale{} ORDER BY created_at DESC",
            ROW_FIELDS, where_clause
        );
        let mut query = self.base.db().query(sql);
        if let Some(start) = start {
            query = query.bind(("start", start));
        }
        if let Some(end) = end {
            query = query.bind(("end", end));
        }
        let rows: Vec<SaleRow> = query.await?.take(0)?;
        Ok(rows)
    }

    /// Find all sales in a window, oldest first — dashboard aggregation input
    pub async fn find_in_window(&self, start: i64, end: i64) -> RepoResult<Vec<Sale>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM sale WHERE created_at >= $start AND created_at < $end \
                 ORDER BY created_at ASC",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?;
        let rows: Vec<Sale> = result.take(0)?;
        Ok(rows)
    }

    /// Find sale by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Sale>> {
        let thing = parse_record_id("sale", id)?;
        let row: Option<Sale> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Record a sale, optionally linked to a reservation
    pub async fn create(&self, data: SaleCreate) -> RepoResult<Sale> {
        if data.amount < Decimal::ZERO {
            return Err(RepoError::Validation(
                "Amount cannot be negative".to_string(),
            ));
        }

        let reservation = match data.reservation.as_deref() {
            Some(id) => {
                let rid = parse_record_id("reservation", id)?;
                let found: Option<Reservation> = self.base.db().select(rid.clone()).await?;
                if found.is_none() {
                    return Err(RepoError::NotFound(format!(
                        "Reservation {} not found",
                        id
                    )));
                }
                Some(rid)
            }
            None => None,
        };

        let created: Option<Sale> = self
            .base
            .db()
            .create("sale")
            .content(Sale {
                id: None,
                item_name: data.item_name,
                amount: data.amount,
                category: data.category,
                reservation,
                created_at: now_millis(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create sale".to_string()))
    }

    /// Delete a sale
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("sale", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Sale {} not found", id)))?;
        let _: Option<Sale> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}
