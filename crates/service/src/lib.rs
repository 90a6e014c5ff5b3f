//! Service layer for the trivia API.
//!
//! Composes store access with pagination and quiz selection so handlers
//! stay thin.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod category_service;
mod error;
mod question_service;
mod quiz_service;

pub use category_service::CategoryService;
pub use error::ServiceError;
pub use question_service::{CreatedQuestion, QuestionPage, QuestionService};
pub use quiz_service::QuizService;
