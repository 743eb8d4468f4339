//! The collection aggregate: every persisted question, in insertion order.
//!
//! All traversal and mutation of the nested question/answer structure goes
//! through [`Collection`], which keeps question ids unique across the
//! collection and answer ids unique within each question. Deserialization
//! runs the same checks, so a collection read from storage is valid or is
//! rejected as a whole.

use super::entities::{Answer, Question};
use super::value_objects::{AnswerId, QuestionId};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Ordered set of questions forming the entire persisted state (Aggregate Root)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Question>")]
pub struct Collection {
    questions: Vec<Question>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from questions, validating id uniqueness
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&QuestionId> = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestionId(question.id().clone()));
            }
            if let Some(answer_id) = question.first_duplicate_answer() {
                return Err(DomainError::DuplicateAnswerId {
                    question_id: question.id().clone(),
                    answer_id: answer_id.clone(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// Questions in insertion order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn find_question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Look up a question, failing with `QuestionNotFound`
    pub fn question(&self, id: &QuestionId) -> Result<&Question, DomainError> {
        self.find_question(id)
            .ok_or_else(|| DomainError::QuestionNotFound(id.clone()))
    }

    /// Look up an answer, distinguishing a missing question from a missing answer
    pub fn answer(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<&Answer, DomainError> {
        self.question(question_id)?
            .find_answer(answer_id)
            .ok_or_else(|| DomainError::AnswerNotFound {
                question_id: question_id.clone(),
                answer_id: answer_id.clone(),
            })
    }

    /// Append a question; the collection is unchanged on error
    pub fn push_question(&mut self, question: Question) -> Result<&Question, DomainError> {
        if self.find_question(question.id()).is_some() {
            return Err(DomainError::DuplicateQuestionId(question.id().clone()));
        }
        if let Some(answer_id) = question.first_duplicate_answer() {
            return Err(DomainError::DuplicateAnswerId {
                question_id: question.id().clone(),
                answer_id: answer_id.clone(),
            });
        }
        self.questions.push(question);
        Ok(&self.questions[self.questions.len() - 1])
    }

    /// Append an answer to the given question; the collection is unchanged on error
    pub fn push_answer(
        &mut self,
        question_id: &QuestionId,
        answer: Answer,
    ) -> Result<&Answer, DomainError> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id() == question_id)
            .ok_or_else(|| DomainError::QuestionNotFound(question_id.clone()))?;
        question.push_answer(answer)
    }
}

impl TryFrom<Vec<Question>> for Collection {
    type Error = DomainError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::from_questions(questions)
    }
}

impl Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.questions.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        let mut collection = Collection::new();
        collection
            .push_question(Question::new("q1", "Jack London", "What is my name?"))
            .unwrap();
        collection
            .push_question(Question::new("q2", "Tim Doods", "Who are you?"))
            .unwrap();
        collection
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert_eq!(serde_json::to_string(&collection).unwrap(), "[]");
    }

    #[test]
    fn test_push_question_preserves_order() {
        let collection = sample();
        let ids: Vec<_> = collection
            .questions()
            .iter()
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }

    #[test]
    fn test_push_duplicate_question_leaves_collection_unchanged() {
        let mut collection = sample();
        let err = collection
            .push_question(Question::new("q1", "Other", "Other"))
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateQuestionId("q1".into()));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.questions()[0].author(), "Jack London");
    }

    #[test]
    fn test_push_answer_only_touches_target_question() {
        let mut collection = sample();
        collection
            .push_answer(&"q2".into(), Answer::new("a1", "B", "T"))
            .unwrap();

        assert!(collection.questions()[0].answers().is_empty());
        assert_eq!(collection.questions()[1].answers().len(), 1);
    }

    #[test]
    fn test_push_answer_missing_question() {
        let mut collection = sample();
        let before = collection.clone();
        let err = collection
            .push_answer(&"nope".into(), Answer::new("a1", "B", "T"))
            .unwrap_err();
        assert_eq!(err, DomainError::QuestionNotFound("nope".into()));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_answer_lookup_distinguishes_failures() {
        let mut collection = sample();
        collection
            .push_answer(&"q1".into(), Answer::new("a1", "B", "T"))
            .unwrap();

        assert_eq!(
            collection.answer(&"q1".into(), &"a1".into()).unwrap().summary,
            "T"
        );
        assert!(matches!(
            collection.answer(&"q9".into(), &"a1".into()),
            Err(DomainError::QuestionNotFound(_))
        ));
        assert!(matches!(
            collection.answer(&"q1".into(), &"missing".into()),
            Err(DomainError::AnswerNotFound { .. })
        ));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_question_ids() {
        let json = r#"[
            {"id":"q1","author":"","summary":"","answers":[]},
            {"id":"q1","author":"","summary":"","answers":[]}
        ]"#;
        let result: Result<Collection, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_questions_large_collection() {
        let questions: Vec<_> = (0..10_000)
            .map(|i| Question::new(format!("q{i}"), "A", "S"))
            .collect();
        let collection = Collection::from_questions(questions.clone()).unwrap();
        assert_eq!(collection.len(), 10_000);

        let mut with_duplicate = questions;
        with_duplicate.push(Question::new("q4321", "B", "T"));
        assert_eq!(
            Collection::from_questions(with_duplicate).unwrap_err(),
            DomainError::DuplicateQuestionId("q4321".into())
        );
    }

    #[test]
    fn test_deserialize_rejects_duplicate_answer_ids() {
        let json = r#"[
            {"id":"q1","author":"","summary":"","answers":[
                {"id":"a1","author":"","summary":""},
                {"id":"a1","author":"","summary":""}
            ]}
        ]"#;
        let result: Result<Collection, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_then_deserialize_preserves_content() {
        let mut collection = sample();
        collection
            .push_answer(&"q1".into(), Answer::new("a1", "B", "T"))
            .unwrap();

        let json = serde_json::to_string(&collection).unwrap();
        let parsed: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection);
    }
}
