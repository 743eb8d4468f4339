//! Question and Answer entities.

use super::value_objects::{AnswerId, QuestionId};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An answer attached to a question (Entity)
///
/// Author and summary are free-form text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub author: String,
    pub summary: String,
}

impl Answer {
    pub fn new(
        id: impl Into<AnswerId>,
        author: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            summary: summary.into(),
        }
    }
}

/// A question owning an ordered list of answers (Entity)
///
/// `answers` is a required field on the wire: a serialized question without
/// it does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    author: String,
    summary: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers
    pub fn new(
        id: impl Into<QuestionId>,
        author: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            summary: summary.into(),
            answers: Vec::new(),
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Answers in insertion order
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Find an answer by id
    pub fn find_answer(&self, answer_id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.id == answer_id)
    }

    /// Append an answer, rejecting an id already used on this question
    pub fn push_answer(&mut self, answer: Answer) -> Result<&Answer, DomainError> {
        if self.find_answer(&answer.id).is_some() {
            return Err(DomainError::DuplicateAnswerId {
                question_id: self.id.clone(),
                answer_id: answer.id,
            });
        }
        self.answers.push(answer);
        Ok(&self.answers[self.answers.len() - 1])
    }

    /// First answer id that appears more than once, if any
    pub(crate) fn first_duplicate_answer(&self) -> Option<&AnswerId> {
        let mut seen = HashSet::with_capacity(self.answers.len());
        self.answers
            .iter()
            .map(|answer| &answer.id)
            .find(|id| !seen.insert(*id))
    }
}
