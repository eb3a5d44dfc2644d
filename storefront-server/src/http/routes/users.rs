//! User endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use storefront_core::{User, UserCreateRequest, UserUpdateRequest};

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, UserId};
use crate::http::response::Envelope;
use crate::state::AppState;

/// GET /users - list all users
async fn list_users(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<User>>>), ApiError> {
    let users = UserRepo::new(state.pool()).list().await?;
    Ok(Envelope::ok("Users fetched successfully", users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    let user = UserRepo::new(state.pool()).get(id).await?;
    Ok(Envelope::ok("User fetched successfully", user))
}

/// POST /users - create a user; the id comes back storage-assigned
async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UserCreateRequest>,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    req.validate()?;
    let user = UserRepo::new(state.pool()).create(&req).await?;
    Ok(Envelope::created("User created successfully", user))
}

/// PUT /users/{id} - full overwrite of the mutable columns
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ApiJson(req): ApiJson<UserUpdateRequest>,
) -> Result<(StatusCode, Json<Envelope<serde_json::Value>>), ApiError> {
    UserRepo::new(state.pool()).update(id, &req).await?;
    Ok(Envelope::ok_empty("User updated successfully"))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<(StatusCode, Json<Envelope<serde_json::Value>>), ApiError> {
    UserRepo::new(state.pool()).delete(id).await?;
    Ok(Envelope::ok_empty("User deleted successfully"))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
