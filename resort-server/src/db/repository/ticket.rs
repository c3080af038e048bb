//! Ticket Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Ticket, TicketCreate, TicketUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct TicketRepository {
    base: BaseRepository,
}

impl TicketRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tickets, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Ticket>> {
        let rows: Vec<Ticket> = self
            .base
            .db()
            .query("SELECT * FROM ticket ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find ticket by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Ticket>> {
        let thing = parse_record_id("ticket", id)?;
        let row: Option<Ticket> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Find ticket by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Ticket>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM ticket WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let rows: Vec<Ticket> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create a new ticket
    pub async fn create(&self, data: TicketCreate) -> RepoResult<Ticket> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Ticket '{}' already exists",
                data.name
            )));
        }

        let created: Option<Ticket> = self
            .base
            .db()
            .create("ticket")
            .content(Ticket {
                id: None,
                name: data.name,
                price: data.price,
                created_at: now_millis(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create ticket".to_string()))
    }

    /// Update a ticket
    pub async fn update(&self, id: &str, data: TicketUpdate) -> RepoResult<Ticket> {
        let thing = parse_record_id("ticket", id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Ticket {} not found", id)))?;

        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Ticket '{}' already exists",
                new_name
            )));
        }

        let updated: Option<Ticket> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Ticket {} not found", id)))
    }

    /// Delete a ticket and unlink reservations that reference it
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("ticket", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Ticket {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE reservation SET ticket = NONE WHERE ticket = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
