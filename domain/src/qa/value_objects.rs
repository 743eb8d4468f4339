//! Identifier value objects for questions and answers.
//!
//! Identifiers are opaque strings supplied by the caller. The domain never
//! generates them; the HTTP layer does.

use serde::{Deserialize, Serialize};

/// Unique identifier of a question within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QuestionId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an answer, unique within its parent question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerId(String);

impl AnswerId {
    /// Creates an AnswerId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for AnswerId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for AnswerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = QuestionId::new("q-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q-1\"");

        let parsed: AnswerId = serde_json::from_str("\"a-1\"").unwrap();
        assert_eq!(parsed.as_str(), "a-1");
    }
}
