use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::collections::HashSet;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::QuizRequest;
use crate::response_types::QuizResponse;

/// Serves a random question the player has not seen yet.
///
/// The client resends every id it has seen; nothing is kept between requests.
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(body) = body?;
    let quiz_category = body
        .quiz_category
        .ok_or_else(|| ApiError::Unprocessable("quiz_category is required".to_owned()))?;
    let previous: HashSet<i64> = body
        .previous_questions
        .ok_or_else(|| ApiError::Unprocessable("previous_questions is required".to_owned()))?
        .into_iter()
        .collect();

    let selection = state.quiz_service.next_question(&previous, quiz_category).await?;
    Ok(Json(QuizResponse { success: true, question: selection.into_question() }))
}
