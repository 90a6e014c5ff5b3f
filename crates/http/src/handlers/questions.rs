use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;

use trivia_core::{NewQuestion, PageRequest, category_map};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{PageQuery, QuestionsPostRequest, SearchRequest};
use crate::response_types::{
    CreatedResponse, DeletedResponse, QuestionListResponse, SearchResponse,
};

fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> Result<PageRequest, ApiError> {
    let Query(query) = query?;
    Ok(query.page_request()?)
}

pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = page_of(query)?;
    let result = state.question_service.list_questions(page).await?;
    if result.questions.is_empty() {
        return Err(ApiError::NotFound(format!("page {} has no questions", page.get())));
    }
    let categories = state.category_service.list_categories().await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// `POST /questions`: searches when the body carries a non-blank
/// `searchTerm`, otherwise creates a question.
pub async fn post_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsPostRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;
    let response = if let Some(term) = body.search_term() {
        let page = page_of(query)?;
        serde_json::to_value(run_search(&state, term, page).await?)
    } else {
        serde_json::to_value(run_create(&state, body).await?)
    };
    response.map(Json).map_err(|e| ApiError::Internal(e.into()))
}

pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(body) = body?;
    let page = page_of(query)?;
    Ok(Json(run_search(&state, &body.search_term, page).await?))
}

pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(id) = id?;
    let total_questions = state.question_service.delete_question(id).await?;
    Ok(Json(DeletedResponse { success: true, deleted: id, total_questions }))
}

async fn run_search(
    state: &AppState,
    term: &str,
    page: PageRequest,
) -> Result<SearchResponse, ApiError> {
    let result = state.question_service.search_questions(term, page).await?;
    Ok(SearchResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
    })
}

async fn run_create(
    state: &AppState,
    body: QuestionsPostRequest,
) -> Result<CreatedResponse, ApiError> {
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(ApiError::Unprocessable(
            "question, answer, difficulty and category are required".to_owned(),
        ));
    };
    let new_question = NewQuestion::new(&question, &answer, difficulty, category)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    let created = state.question_service.create_question(new_question).await?;
    Ok(CreatedResponse {
        success: true,
        created: created.question.id,
        total_questions: created.total_questions,
    })
}
