use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection, rejection::QueryRejection},
};
use std::sync::Arc;

use trivia_core::category_map;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::response_types::{CategoriesResponse, CategoryQuestionsResponse};

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.category_service.list_categories().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories stored".to_owned()));
    }
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

pub async fn category_questions(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let page = query.page_request()?;
    let (category, result) = state.question_service.questions_by_category(id, page).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: category,
    }))
}
