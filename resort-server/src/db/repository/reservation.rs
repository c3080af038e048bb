//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{
    Accommodation, Reservation, ReservationCreate, ReservationRow, ReservationUpdate, Ticket,
};
use crate::utils::time::{now_millis, parse_date};
use rust_decimal::Decimal;
use shared::{ReservationStatus, ReservationType};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// 列表查询同时解析关联名称，避免客户端逐条取名
const ROW_FIELDS: &str = "*, accommodation.name AS accommodation_name, ticket.name AS ticket_name";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find reservations in an inclusive date range with whitelisted sorting
    pub async fn find_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        sort_by: &str,
        order: &str,
    ) -> RepoResult<Vec<ReservationRow>> {
        let order_clause = build_order_clause(sort_by, order)?;

        let mut conditions = Vec::new();
        if let Some(from) = from {
            parse_date(from)
                .map_err(|_| RepoError::Validation(format!("Invalid date: {}", from)))?;
            conditions.push("date >= $from");
        }
        if let Some(to) = to {
            parse_date(to).map_err(|_| RepoError::Validation(format!("Invalid date: {}", to)))?;
            conditions.push("date <= $to");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM reservation{} {}",
            ROW_FIELDS, where_clause, order_clause
        );
        let mut query = self.base.db().query(sql);
        if let Some(from) = from {
            query = query.bind(("from", from.to_string()));
        }
        if let Some(to) = to {
            query = query.bind(("to", to.to_string()));
        }
        let rows: Vec<ReservationRow> = query.await?.take(0)?;
        Ok(rows)
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing = parse_record_id("reservation", id)?;
        let row: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Find reservation by id with linked names resolved
    pub async fn find_row_by_id(&self, id: &str) -> RepoResult<Option<ReservationRow>> {
        let thing = parse_record_id("reservation", id)?;
        let mut result = self
            .base
            .db()
            .query(format!("SELECT {} FROM $thing", ROW_FIELDS))
            .bind(("thing", thing))
            .await?;
        let rows: Vec<ReservationRow> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create a reservation — balance is always derived server-side
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        parse_date(&data.date)
            .map_err(|_| RepoError::Validation(format!("Invalid date: {}", data.date)))?;
        if data.headcount == 0 {
            return Err(RepoError::Validation(
                "headcount must be at least 1".to_string(),
            ));
        }
        check_link_applicability(
            data.reservation_type,
            data.accommodation.is_some(),
            data.ticket.is_some(),
        )?;

        let deposit = data.deposit.unwrap_or(Decimal::ZERO);
        let balance = derive_balance(data.total_amount, deposit)?;

        let accommodation = match data.accommodation.as_deref() {
            Some(id) => Some(self.resolve_accommodation(id).await?),
            None => None,
        };
        let ticket = match data.ticket.as_deref() {
            Some(id) => Some(self.resolve_ticket(id).await?),
            None => None,
        };

        let created: Option<Reservation> = self
            .base
            .db()
            .create("reservation")
            .content(Reservation {
                id: None,
                reservation_type: data.reservation_type,
                customer_name: data.customer_name,
                phone: data.phone,
                date: data.date,
                headcount: data.headcount,
                accommodation,
                ticket,
                pickup_location: data.pickup_location,
                pickup_time: data.pickup_time,
                total_amount: data.total_amount,
                deposit,
                balance,
                notes: data.notes,
                status: ReservationStatus::Booked,
                created_at: now_millis(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Update a reservation, recomputing the balance
    pub async fn update(&self, id: &str, data: ReservationUpdate) -> RepoResult<Reservation> {
        let thing = parse_record_id("reservation", id)?;
        let mut existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        if let Some(ref date) = data.date {
            parse_date(date)
                .map_err(|_| RepoError::Validation(format!("Invalid date: {}", date)))?;
            existing.date = date.clone();
        }
        if let Some(customer_name) = data.customer_name {
            existing.customer_name = customer_name;
        }
        if let Some(phone) = data.phone {
            existing.phone = phone;
        }
        if let Some(headcount) = data.headcount {
            if headcount == 0 {
                return Err(RepoError::Validation(
                    "headcount must be at least 1".to_string(),
                ));
            }
            existing.headcount = headcount;
        }
        if let Some(pickup_location) = data.pickup_location {
            existing.pickup_location = pickup_location;
        }
        if let Some(pickup_time) = data.pickup_time {
            existing.pickup_time = pickup_time;
        }
        if let Some(total_amount) = data.total_amount {
            existing.total_amount = total_amount;
        }
        if let Some(deposit) = data.deposit {
            existing.deposit = deposit;
        }
        if let Some(notes) = data.notes {
            existing.notes = notes;
        }

        // 先确定最终类型；携带与该类型不兼容的关联直接拒绝，
        // 避免类型切换清空后又被同一请求重新挂上。
        let final_type = data.reservation_type.unwrap_or(existing.reservation_type);
        check_link_applicability(
            final_type,
            matches!(data.accommodation, Some(Some(_))),
            matches!(data.ticket, Some(Some(_))),
        )?;

        if let Some(accommodation) = data.accommodation {
            existing.accommodation = match accommodation {
                Some(ref acc_id) => Some(self.resolve_accommodation(acc_id).await?),
                None => None,
            };
        }
        if let Some(ticket) = data.ticket {
            existing.ticket = match ticket {
                Some(ref ticket_id) => Some(self.resolve_ticket(ticket_id).await?),
                None => None,
            };
        }

        // 类型切换后清理不再适用的旧关联
        existing.reservation_type = final_type;
        match final_type {
            ReservationType::Accommodation => existing.ticket = None,
            ReservationType::Day => existing.accommodation = None,
        }

        existing.balance = derive_balance(existing.total_amount, existing.deposit)?;
        existing.id = None;

        let updated: Option<Reservation> = self.base.db().update(thing).content(existing).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Change reservation status — transitions are only allowed from `booked`
    pub async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> RepoResult<Reservation> {
        let thing = parse_record_id("reservation", id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        if existing.status.is_terminal() {
            return Err(RepoError::BusinessRule(format!(
                "Cannot change status of a {} reservation",
                existing.status
            )));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;
        result
            .take::<Option<Reservation>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Delete a reservation and unlink sales that reference it
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("reservation", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE sale SET reservation = NONE WHERE reservation = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Count non-cancelled reservations in an inclusive date range
    pub async fn count_in_range(&self, from: &str, to: &str) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() AS total FROM reservation \
                 WHERE date >= $from AND date <= $to AND status != $cancelled GROUP ALL",
            )
            .bind(("from", from.to_string()))
            .bind(("to", to.to_string()))
            .bind(("cancelled", ReservationStatus::Cancelled))
            .await?;
        let counts: Vec<CountRow> = result.take(0)?;
        Ok(counts.into_iter().next().map(|c| c.total).unwrap_or(0))
    }

    async fn resolve_accommodation(&self, id: &str) -> RepoResult<RecordId> {
        let rid = parse_record_id("accommodation", id)?;
        let found: Option<Accommodation> = self.base.db().select(rid.clone()).await?;
        if found.is_none() {
            return Err(RepoError::NotFound(format!(
                "Accommodation {} not found",
                id
            )));
        }
        Ok(rid)
    }

    async fn resolve_ticket(&self, id: &str) -> RepoResult<RecordId> {
        let rid = parse_record_id("ticket", id)?;
        let found: Option<Ticket> = self.base.db().select(rid.clone()).await?;
        if found.is_none() {
            return Err(RepoError::NotFound(format!("Ticket {} not found", id)));
        }
        Ok(rid)
    }
}

#[derive(Debug, serde::Deserialize)]
struct CountRow {
    total: u64,
}

fn derive_balance(total: Decimal, deposit: Decimal) -> RepoResult<Decimal> {
    if total < Decimal::ZERO || deposit < Decimal::ZERO {
        return Err(RepoError::Validation(
            "Amounts cannot be negative".to_string(),
        ));
    }
    if deposit > total {
        return Err(RepoError::Validation(
            "Deposit cannot exceed total amount".to_string(),
        ));
    }
    Ok(total - deposit)
}

/// Day visits link a ticket, accommodation stays link an accommodation —
/// never the other way around.
fn check_link_applicability(
    reservation_type: ReservationType,
    has_accommodation: bool,
    has_ticket: bool,
) -> RepoResult<()> {
    match reservation_type {
        ReservationType::Day if has_accommodation => Err(RepoError::Validation(
            "A day reservation cannot link an accommodation".to_string(),
        )),
        ReservationType::Accommodation if has_ticket => Err(RepoError::Validation(
            "An accommodation reservation cannot link a ticket".to_string(),
        )),
        _ => Ok(()),
    }
}

fn build_order_clause(sort_by: &str, order: &str) -> RepoResult<String> {
    let dir = match order {
        "asc" => "ASC",
        "desc" => "DESC",
        other => {
            return Err(RepoError::Validation(format!(
                "Invalid sort order: {}",
                other
            )));
        }
    };
    match sort_by {
        "date" => Ok(format!("ORDER BY date {}, reservation_type ASC", dir)),
        "reservation_type" => Ok(format!("ORDER BY reservation_type {}, date ASC", dir)),
        other => Err(RepoError::Validation(format!(
            "Invalid sort field: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_balance() {
        let balance = derive_balance(Decimal::new(150_000, 0), Decimal::new(50_000, 0)).unwrap();
        assert_eq!(balance, Decimal::new(100_000, 0));
        assert!(derive_balance(Decimal::new(100, 0), Decimal::new(200, 0)).is_err());
        assert!(derive_balance(Decimal::new(-1, 0), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_link_applicability() {
        assert!(check_link_applicability(ReservationType::Day, false, true).is_ok());
        assert!(check_link_applicability(ReservationType::Accommodation, true, false).is_ok());
        assert!(check_link_applicability(ReservationType::Day, true, false).is_err());
        assert!(check_link_applicability(ReservationType::Accommodation, false, true).is_err());
    }

    #[test]
    fn test_order_clause_whitelist() {
        assert!(build_order_clause("date", "asc").is_ok());
        assert!(build_order_clause("reservation_type", "desc").is_ok());
        assert!(build_order_clause("customer_name", "asc").is_err());
        assert!(build_order_clause("date", "sideways").is_err());
    }
}
