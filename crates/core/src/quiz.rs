//! Quiz mode: uniform random draw of an unseen question.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORIES_ID;
use crate::question::Question;

/// Category selector sent by quiz clients as `{"id": ..., "type": ...}`.
///
/// `id` 0 means every category. Clients that key categories by JSON object
/// keys send the id as a numeric string, so both forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "crate::serde_helpers::number_or_string")]
    pub id: i64,
}

/// Which questions form the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(i64),
}

impl QuizCategory {
    pub const ALL: Self = Self { id: ALL_CATEGORIES_ID };

    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn scope(self) -> CategoryScope {
        if self.id == ALL_CATEGORIES_ID { CategoryScope::All } else { CategoryScope::Only(self.id) }
    }
}

/// Outcome of a quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSelection {
    Next(Question),
    /// Every question in the pool has been seen; the game is over.
    Exhausted,
}

impl QuizSelection {
    #[must_use]
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Next(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Draws one question uniformly at random from the part of `pool` whose ids
/// are not in `previous_ids`.
pub fn select_next<R>(previous_ids: &HashSet<i64>, pool: &[Question], rng: &mut R) -> QuizSelection
where
    R: Rng + ?Sized,
{
    let available: Vec<&Question> =
        pool.iter().filter(|q| !previous_ids.contains(&q.id)).collect();
    tracing::debug!(pool = pool.len(), available = available.len(), "quiz draw");
    match available.choose(rng) {
        Some(q) => QuizSelection::Next((*q).clone()),
        None => QuizSelection::Exhausted,
    }
}
