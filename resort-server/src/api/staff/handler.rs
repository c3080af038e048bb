//! Staff API Handlers
//!
//! 全部路由由 `require_admin` 中间件保护；管理员不能删除或停用自己。

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{StaffCreate, StaffUpdate};
use crate::db::repository::StaffRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text, validate_password,
    validate_required_text,
};
use shared::models::StaffAccount as SharedStaff;

/// GET /api/staff - 获取所有员工账号
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SharedStaff>>> {
    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.find_all().await?;
    Ok(Json(staff.into_iter().map(|s| s.into()).collect()))
}

/// POST /api/staff - 创建员工账号
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<SharedStaff>> {
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.create(payload).await?;
    Ok(Json(staff.into()))
}

/// PUT /api/staff/:id - 更新员工账号
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<SharedStaff>> {
    if let Some(ref email) = payload.email {
        validate_email(email)?;
    }
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    // 管理员不能停用自己的账号
    if is_self(&user, &id) && payload.is_active == Some(false) {
        return Err(AppError::forbidden("Cannot deactivate your own account"));
    }

    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.update(&id, payload).await?;
    Ok(Json(staff.into()))
}

/// DELETE /api/staff/:id - 删除员工账号
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if is_self(&user, &id) {
        return Err(AppError::forbidden("Cannot delete your own account"));
    }

    let repo = StaffRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

/// 当前用户 ID 为 "staff:key" 全称；路径参数可能是全称或裸 key
fn is_self(user: &CurrentUser, id: &str) -> bool {
    user.id == id || user.id == format!("staff:{}", id)
}
