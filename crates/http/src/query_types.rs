//! Request/query types (Deserialize)

use serde::Deserialize;
use trivia_core::serde_helpers::{opt_number_or_string, opt_vec_number_or_string};
use trivia_core::{PageRequest, QuizCategory};

/// `?page=N`. Kept as raw text so a malformed value becomes a 400 envelope
/// instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> trivia_core::Result<PageRequest> {
        PageRequest::parse(self.page.as_deref())
    }
}

/// Body of `POST /questions`: either a search (`searchTerm`) or a new question.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub category: Option<i64>,
}

impl QuestionsPostRequest {
    /// The search term when present and non-blank; otherwise this is a create.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "opt_vec_number_or_string")]
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_term_means_create() {
        let body: QuestionsPostRequest =
            serde_json::from_str(r#"{"searchTerm": "  ", "question": "Q?"}"#).unwrap();
        assert_eq!(body.search_term(), None);
        let body: QuestionsPostRequest =
            serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(body.search_term(), Some("title"));
    }

    #[test]
    fn create_fields_accept_string_numbers() {
        let body: QuestionsPostRequest = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "difficulty": "2", "category": "5"}"#,
        )
        .unwrap();
        assert_eq!(body.difficulty, Some(2));
        assert_eq!(body.category, Some(5));
    }

    #[test]
    fn missing_page_is_first_page() {
        assert_eq!(PageQuery::default().page_request().unwrap(), PageRequest::FIRST);
    }

    #[test]
    fn quiz_previous_ids_accept_string_numbers() {
        let body: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": ["1", 2], "quiz_category": {"id": "0"}}"#,
        )
        .unwrap();
        assert_eq!(body.previous_questions, Some(vec![1, 2]));
        assert_eq!(body.quiz_category, Some(QuizCategory::ALL));
    }
}
