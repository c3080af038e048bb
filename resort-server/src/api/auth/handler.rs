//! Authentication Handlers

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::StaffRepository;
use crate::utils::AppError;

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - 邮箱密码登录，返回 JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = StaffRepository::new(state.db.clone());
    let staff = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let staff = match staff {
        Some(s) => {
            if !s.is_active {
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = s
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid("Invalid email or password"));
            }

            s
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid("Invalid email or password"));
        }
    };

    let user_id = staff.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &staff.email, &staff.name, staff.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, email = %staff.email, "Login successful");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            email: staff.email,
            name: staff.name,
            role: staff.role,
        },
    }))
}

/// GET /api/auth/me - 当前登录用户信息
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
    })
}
