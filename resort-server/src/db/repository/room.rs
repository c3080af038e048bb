//! Room Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Accommodation, Room, RoomCreate, RoomUpdate};
use crate::utils::time::now_millis;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all rooms of one accommodation, ordered by name
    pub async fn find_by_accommodation(&self, accommodation_id: &str) -> RepoResult<Vec<Room>> {
        let owner = parse_record_id("accommodation", accommodation_id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room WHERE accommodation = $owner ORDER BY name")
            .bind(("owner", owner))
            .await?;
        let rows: Vec<Room> = result.take(0)?;
        Ok(rows)
    }

    /// Find room by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        let thing = parse_record_id("room", id)?;
        let row: Option<Room> = self.base.db().select(thing).await?;
        Ok(row)
    }

    async fn find_by_name(&self, owner: RecordId, name: &str) -> RepoResult<Option<Room>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room WHERE accommodation = $owner AND name = $name LIMIT 1")
            .bind(("owner", owner))
            .bind(("name", name_owned))
            .await?;
        let rows: Vec<Room> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create a room under an accommodation
    pub async fn create(&self, accommodation_id: &str, data: RoomCreate) -> RepoResult<Room> {
        let owner = parse_record_id("accommodation", accommodation_id)?;
        let exists: Option<Accommodation> = self.base.db().select(owner.clone()).await?;
        if exists.is_none() {
            return Err(RepoError::NotFound(format!(
                "Accommodation {} not found",
                accommodation_id
            )));
        }

        if self.find_by_name(owner.clone(), &data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists for this accommodation",
                data.name
            )));
        }

        let created: Option<Room> = self
            .base
            .db()
            .create("room")
            .content(Room {
                id: None,
                accommodation: owner,
                name: data.name,
                capacity: data.capacity,
                price: data.price,
                created_at: now_millis(),
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create room".to_string()))
    }

    /// Update a room
    pub async fn update(&self, id: &str, data: RoomUpdate) -> RepoResult<Room> {
        let thing = parse_record_id("room", id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;

        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self
                .find_by_name(existing.accommodation.clone(), new_name)
                .await?
                .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists for this accommodation",
                new_name
            )));
        }

        let updated: Option<Room> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))
    }

    /// Delete a room
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("room", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;
        let _: Option<Room> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}
