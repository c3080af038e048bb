//! Staff Model

use serde::{Deserialize, Serialize};
use shared::StaffRole;
use surrealdb::RecordId;

/// Staff ID type
pub type StaffId = RecordId;

/// Staff account matching SurrealDB schema
///
/// `hash_pass` 不参与序列化，写入必须走 `CREATE/UPDATE ... SET` 语句绑定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StaffId>,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: StaffRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: StaffRole,
}

/// Update staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Staff {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = Staff::hash_password("secret123").unwrap();
        let staff = Staff {
            id: None,
            email: "a@b.c".to_string(),
            name: "Tester".to_string(),
            phone: None,
            hash_pass: hash,
            role: StaffRole::Employee,
            is_active: true,
            created_at: 0,
        };
        assert!(staff.verify_password("secret123").unwrap());
        assert!(!staff.verify_password("wrong").unwrap());
    }
}
