//! Staff Repository
//!
//! `hash_pass` 不序列化，所有写入走 `CREATE/UPDATE ... SET` 语句绑定。

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Staff, StaffCreate, StaffUpdate};
use crate::utils::time::now_millis;
use ring::rand::{SecureRandom, SystemRandom};
use shared::StaffRole;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all staff accounts, ordered by email
    pub async fn find_all(&self) -> RepoResult<Vec<Staff>> {
        let rows: Vec<Staff> = self
            .base
            .db()
            .query("SELECT * FROM staff ORDER BY email")
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Find staff by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Staff>> {
        let thing = parse_record_id("staff", id)?;
        let row: Option<Staff> = self.base.db().select(thing).await?;
        Ok(row)
    }

    /// Find staff by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Staff>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let rows: Vec<Staff> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Create a new staff account
    pub async fn create(&self, data: StaffCreate) -> RepoResult<Staff> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                data.email
            )));
        }

        let hash_pass = Staff::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE staff SET
                    email = $email,
                    name = $name,
                    phone = $phone,
                    hash_pass = $hash_pass,
                    role = $role,
                    is_active = true,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("email", data.email))
            .bind(("name", data.name))
            .bind(("phone", data.phone))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("created_at", now_millis()))
            .await?;

        let created: Option<Staff> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))
    }

    /// Update a staff account
    pub async fn update(&self, id: &str, data: StaffUpdate) -> RepoResult<Staff> {
        let thing = parse_record_id("staff", id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))?;

        if let Some(ref new_email) = data.email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                new_email
            )));
        }

        let hash_pass = match data.password {
            Some(ref password) => Some(
                Staff::hash_password(password)
                    .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?,
            ),
            None => None,
        };

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    email = $email OR email,
                    name = $name OR name,
                    phone = $phone OR phone,
                    hash_pass = $hash_pass OR hash_pass,
                    role = IF $has_role THEN $role ELSE role END,
                    is_active = IF $has_is_active THEN $is_active ELSE is_active END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("email", data.email))
            .bind(("name", data.name))
            .bind(("phone", data.phone))
            .bind(("hash_pass", hash_pass))
            .bind(("has_role", data.role.is_some()))
            .bind(("role", data.role))
            .bind(("has_is_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .await?;

        result
            .take::<Option<Staff>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))
    }

    /// Hard delete a staff account
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("staff", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Bootstrap the default admin account when the staff table is empty
    ///
    /// 未配置 ADMIN_PASSWORD 时生成随机密码并写入日志，仅首次启动可见。
    pub async fn ensure_default_admin(
        &self,
        email: &str,
        password: Option<&str>,
    ) -> RepoResult<()> {
        let existing = self.find_all().await?;
        if !existing.is_empty() {
            return Ok(());
        }

        let generated;
        let password = match password {
            Some(p) => p,
            None => {
                generated = generate_printable_password();
                tracing::warn!(
                    "ADMIN_PASSWORD not set, generated admin password: {}",
                    generated
                );
                &generated
            }
        };

        self.create(StaffCreate {
            email: email.to_string(),
            password: password.to_string(),
            name: "Administrator".to_string(),
            phone: None,
            role: StaffRole::Admin,
        })
        .await?;
        tracing::info!("Default admin account created: {}", email);
        Ok(())
    }
}

fn generate_printable_password() -> String {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut key = String::new();

    for _ in 0..16 {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            return "ResortAdminBootstrap2026!".to_string();
        }
        let idx = (byte[0] as usize) % allowed_chars.len();
        key.push(allowed_chars.as_bytes()[idx] as char);
    }

    key
}
