//! Domain error types

use crate::qa::value_objects::{AnswerId, QuestionId};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Answer {answer_id} not found on question {question_id}")]
    AnswerNotFound {
        question_id: QuestionId,
        answer_id: AnswerId,
    },

    #[error("Question id already exists: {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("Answer id {answer_id} already exists on question {question_id}")]
    DuplicateAnswerId {
        question_id: QuestionId,
        answer_id: AnswerId,
    },
}

impl DomainError {
    /// Check if this error means the requested question or answer is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::QuestionNotFound(_) | DomainError::AnswerNotFound { .. }
        )
    }

    /// Check if this error is an id collision on insert
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateQuestionId(_) | DomainError::DuplicateAnswerId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DomainError::QuestionNotFound(QuestionId::new("q1"));
        assert_eq!(error.to_string(), "Question not found: q1");

        let error = DomainError::AnswerNotFound {
            question_id: QuestionId::new("q1"),
            answer_id: AnswerId::new("a9"),
        };
        assert_eq!(error.to_string(), "Answer a9 not found on question q1");
    }

    #[test]
    fn test_error_classification() {
        assert!(DomainError::QuestionNotFound("q".into()).is_not_found());
        assert!(
            DomainError::AnswerNotFound {
                question_id: "q".into(),
                answer_id: "a".into(),
            }
            .is_not_found()
        );
        assert!(DomainError::DuplicateQuestionId("q".into()).is_duplicate());
        assert!(!DomainError::DuplicateQuestionId("q".into()).is_not_found());
        assert!(!DomainError::QuestionNotFound("q".into()).is_duplicate());
    }
}
