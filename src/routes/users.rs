// ABOUTME: User account and progress route handlers
// ABOUTME: Registration, placeholder login, account CRUD and progress tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! User routes
//!
//! Login issues an opaque placeholder token; no route checks it yet, which
//! is why `GET /users/me` answers 501.

use super::json_body;
use crate::database::DUPLICATE_USER_MESSAGE;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{
    ListQuery, LoginRequest, Message, ProgressUpdate, RegisterUserRequest, TokenResponse,
    UserResponse,
};
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use http::StatusCode;
use std::sync::Arc;
use tokio::task;
use tracing::{info, warn};

/// User routes implementation
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/users/register", post(Self::handle_register))
            .route("/users/login", post(Self::handle_login))
            .route("/users/me", get(Self::handle_me))
            .route("/users", get(Self::handle_list))
            .route(
                "/users/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route(
                "/users/:id/progress",
                post(Self::handle_record_progress).get(Self::handle_list_progress),
            )
            .with_state(resources)
    }

    /// Handle POST /users/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RegisterUserRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        request.validate()?;

        if resources
            .database
            .user_conflict_exists(&request.email, &request.username, None)
            .await?
        {
            return Err(AppError::already_exists(DUPLICATE_USER_MESSAGE));
        }

        let hashed_password = hash_password(request.password).await?;
        let user = resources
            .database
            .create_user(&request.email, &request.username, &hashed_password)
            .await?;

        info!(user.id = user.id, "User registered");
        Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
    }

    /// Handle POST /users/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;

        let Some(user) = resources.database.get_user_by_email(&request.email).await? else {
            AppLogger::log_auth_event(None, "login", false);
            return Err(AppError::auth_invalid("Incorrect email or password"));
        };

        if !verify_password(request.password, user.hashed_password.clone()).await? {
            AppLogger::log_auth_event(Some(user.id), "login", false);
            return Err(AppError::auth_invalid("Incorrect email or password"));
        }

        if !user.is_active {
            warn!(user.id = user.id, "Login blocked for deactivated account");
            return Err(AppError::invalid_input("User account is deactivated"));
        }

        AppLogger::log_auth_event(Some(user.id), "login", true);
        Ok(Json(TokenResponse::issue(user.id, Utc::now())).into_response())
    }

    /// Handle GET /users/me
    async fn handle_me() -> Result<Response, AppError> {
        Err(AppError::not_implemented(
            "User authentication not yet implemented",
        ))
    }

    /// Handle GET /users
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let users: Vec<UserResponse> = resources
            .database
            .list_users(query.offset(), query.limit())
            .await?
            .into_iter()
            .map(UserResponse::from)
            .collect();

        Ok(Json(users).into_response())
    }

    /// Handle GET /users/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        Ok(Json(UserResponse::from(user)).into_response())
    }

    /// Handle PUT /users/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
        payload: Result<Json<RegisterUserRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request = json_body(payload)?;
        request.validate()?;

        if resources.database.get_user(user_id).await?.is_none() {
            return Err(AppError::not_found("User"));
        }

        if resources
            .database
            .user_conflict_exists(&request.email, &request.username, Some(user_id))
            .await?
        {
            return Err(AppError::already_exists(DUPLICATE_USER_MESSAGE));
        }

        let hashed_password = hash_password(request.password).await?;
        let user = resources
            .database
            .update_user(user_id, &request.email, &request.username, &hashed_password)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        Ok(Json(UserResponse::from(user)).into_response())
    }

    /// Handle DELETE /users/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        if !resources.database.delete_user(user_id).await? {
            return Err(AppError::not_found("User"));
        }

        Ok(Json(Message::new("User deleted successfully")).into_response())
    }

    /// Handle POST /users/:id/progress
    async fn handle_record_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
        payload: Result<Json<ProgressUpdate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let update = json_body(payload)?;
        update.validate()?;

        if resources.database.get_user(user_id).await?.is_none() {
            return Err(AppError::not_found("User"));
        }

        let entry = resources.database.create_progress(user_id, &update).await?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle GET /users/:id/progress
    async fn handle_list_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<i64>,
    ) -> Result<Response, AppError> {
        if resources.database.get_user(user_id).await?.is_none() {
            return Err(AppError::not_found("User"));
        }

        let entries = resources.database.list_progress(user_id).await?;
        Ok(Json(entries).into_response())
    }
}

/// Hash a password off the async executor
async fn hash_password(password: String) -> AppResult<String> {
    task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
}

/// Verify a password off the async executor
async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password verification error: {e}")))
}
