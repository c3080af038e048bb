//! Staff Model

use serde::{Deserialize, Serialize};

use crate::types::StaffRole;

/// Staff account read model — never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAccount {
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: i64,
}
