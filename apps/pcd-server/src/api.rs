//! The phase-change diagram endpoint

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pcd_model::{InvalidPressure, PhaseError, PhaseVolumes};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request/Response Types
// ---------------------------------------------------------------------------

/// Query string of `GET /phase-change-diagram`
#[derive(Debug, Default, Deserialize)]
pub struct PressureQuery {
    /// Raw pressure text; parsing happens in the calculator
    pub pressure: Option<String>,
}

/// Error payload
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// A rejected request: status code plus message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<PhaseError> for ApiError {
    fn from(err: PhaseError) -> Self {
        let status = match &err {
            PhaseError::MissingParameter | PhaseError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            PhaseError::NotFound { .. } => StatusCode::NOT_FOUND,
            PhaseError::Constants { .. } | PhaseError::ConstantsFile { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// A query string that does not decode into [`PressureQuery`], such as a
/// repeated `pressure` key, is an invalid pressure value.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "undecodable query string");
        PhaseError::from(InvalidPressure::Unparseable).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ---------------------------------------------------------------------------
// API Handlers
// ---------------------------------------------------------------------------

/// GET /phase-change-diagram?pressure=<value> - Liquid and vapor specific volumes
pub async fn phase_change_diagram(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PressureQuery>, QueryRejection>,
) -> Result<Json<PhaseVolumes>, ApiError> {
    let Query(query) = query?;
    let raw = query.pressure.as_deref();

    match state.calculator.evaluate(raw) {
        Ok(volumes) => {
            tracing::debug!(pressure = ?raw, ?volumes, "phase volumes computed");
            Ok(Json(volumes))
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::debug!(pressure = ?raw, %err, "rejected pressure");
            } else {
                tracing::error!(pressure = ?raw, %err, "phase calculation failed");
            }
            Err(err.into())
        }
    }
}
