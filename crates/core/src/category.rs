use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A labeled grouping of questions. Reference data, never mutated through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    #[must_use]
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self { id, kind: kind.into() }
    }
}

/// `{id: type}` map as served by the category listing endpoints.
///
/// Ordered by id; JSON object keys come out as decimal strings.
#[must_use]
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "type": "Geography"}));
    }

    #[test]
    fn category_map_uses_string_keys() {
        let map = category_map(&[Category::new(2, "Art"), Category::new(1, "Science")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
