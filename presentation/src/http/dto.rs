//! Request bodies accepted by the HTTP API.

use responder_domain::{Answer, AnswerId, Question, QuestionId};
use serde::Deserialize;
use uuid::Uuid;

/// Body of `POST /questions`; missing fields become empty strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewQuestionRequest {
    pub author: String,
    pub summary: String,
}

impl NewQuestionRequest {
    /// Build the question with a freshly generated id and no answers
    pub fn into_question(self) -> Question {
        Question::new(
            QuestionId::new(Uuid::new_v4().to_string()),
            self.author,
            self.summary,
        )
    }
}

/// Body of `POST /questions/:id/answers`; missing fields become empty strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewAnswerRequest {
    pub author: String,
    pub summary: String,
}

impl NewAnswerRequest {
    /// Build the answer with a freshly generated id
    pub fn into_answer(self) -> Answer {
        Answer::new(
            AnswerId::new(Uuid::new_v4().to_string()),
            self.author,
            self.summary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: NewQuestionRequest = serde_json::from_str("{}").unwrap();
        let question = req.into_question();
        assert_eq!(question.author(), "");
        assert_eq!(question.summary(), "");
        assert!(question.answers().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = NewAnswerRequest::default().into_answer();
        let b = NewAnswerRequest::default().into_answer();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(a.id.as_str()).is_ok());
    }
}
