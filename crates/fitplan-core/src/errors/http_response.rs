// ABOUTME: axum integration for AppError
// ABOUTME: Renders errors into status code plus JSON envelope and logs server-side failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_server_error() {
            error!(
                code = ?self.code,
                error = %self.message,
                source = ?self.source,
                "Request failed with server error"
            );
        } else {
            warn!(code = ?self.code, error = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
