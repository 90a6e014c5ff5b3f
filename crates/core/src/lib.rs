//! Core types and pure logic for the trivia API.
//!
//! Domain types shared by every other crate, plus the two pieces of real
//! logic: page windowing and the quiz draw.

mod category;
pub mod constants;
pub mod env_config;
mod error;
pub mod pagination;
mod question;
pub mod quiz;
pub mod serde_helpers;

pub use category::{Category, category_map};
pub use constants::*;
pub use env_config::{PoolSettings, env_parse_with_default};
pub use error::{CoreError, Result};
pub use pagination::{PageRequest, paginate};
pub use question::{NewQuestion, Question};
pub use quiz::{CategoryScope, QuizCategory, QuizSelection, select_next};
