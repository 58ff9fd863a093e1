//! Query endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{query::QueryRequest, response::QueryResponse};

/// POST /query - answer a health question with sources
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let response = state.orchestrator().handle_query(&request.query).await?;
    Ok(Json(response))
}
