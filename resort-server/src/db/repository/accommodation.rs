//! Accommodation Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Accommodation, AccommodationCreate, AccommodationUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct AccommodationRepository {
    base: BaseRepository,
}

impl AccommodationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all accommodations, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Accommodation>> {
        let rows: Vec<Accommodation> = self
            .base
            .db()
            .query("SELECT * FROM accommodation ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find accommodation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Accommodation>> {
        let thing = parse_record_id("accommodation", id)?;
        let row: Option<Accommodation> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Find accommodation by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Accommodation>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM accommodation WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let rows: Vec<Accommodation> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create a new accommodation
    pub async fn create(&self, data: AccommodationCreate) -> RepoResult<Accommodation> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Accommodation '{}' already exists",
                data.name
            )));
        }

        let created: Option<Accommodation> = self
            .base
            .db()
            .create("accommodation")
            .content(Accommodation {
                id: None,
                name: data.name,
                contact: data.contact,
                details: data.details,
                created_at: now_millis(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create accommodation".to_string()))
    }

    /// Update an accommodation
    pub async fn update(&self, id: &str, data: AccommodationUpdate) -> RepoResult<Accommodation> {
        let thing = parse_record_id("accommodation", id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Accommodation {} not found", id)))?;

        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Accommodation '{}' already exists",
                new_name
            )));
        }

        let updated: Option<Accommodation> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Accommodation {} not found", id)))
    }

    /// Delete an accommodation, its rooms, and unlink reservations
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("accommodation", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Accommodation {} not found", id)))?;

        self.base
            .db()
            .query("DELETE room WHERE accommodation = $thing")
            .query("UPDATE reservation SET accommodation = NONE WHERE accommodation = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
