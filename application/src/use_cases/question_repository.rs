//! Question Repository use case
//!
//! Nested-collection queries and mutations over a [`DocumentStore`]. Every
//! operation is a full round-trip through the store: reads `load()`, and
//! mutations `load()`, change the collection in memory, then `save()` it.
//!
//! The store is owned behind a [`RwLock`]. Mutations hold the write guard
//! for their whole load-mutate-save sequence, so concurrent `add_*` calls are
//! linearizable and no update is lost. Reads share the read guard and never
//! overlap a save.

use crate::ports::document_store::{DocumentStore, StoreError};
use responder_domain::{Answer, AnswerId, DomainError, Question, QuestionId};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Errors that can occur during repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RepositoryError {
    /// The requested question or answer does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Domain(e) if e.is_not_found())
    }

    /// An insert collided with an existing id
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RepositoryError::Domain(e) if e.is_duplicate())
    }
}

/// Use case exposing the question/answer operations
pub struct QuestionRepository<S: DocumentStore> {
    store: RwLock<S>,
}

impl<S: DocumentStore> QuestionRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Make sure the backing store holds a collection before first use
    pub async fn initialize(&self) -> Result<(), RepositoryError> {
        let store = self.store.write().await;
        store.ensure_initialized().await?;
        Ok(())
    }

    /// All questions in persisted order
    pub async fn get_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        let store = self.store.read().await;
        let collection = store.load().await?;
        debug!("Loaded {} questions", collection.len());
        Ok(collection.into_questions())
    }

    pub async fn get_question_by_id(&self, id: &QuestionId) -> Result<Question, RepositoryError> {
        let store = self.store.read().await;
        let collection = store.load().await?;
        Ok(collection.question(id)?.clone())
    }

    /// Append a new question. Fails with a duplicate id error if `question`'s
    /// id is already taken; nothing is saved in that case.
    pub async fn add_question(&self, question: Question) -> Result<Question, RepositoryError> {
        let store = self.store.write().await;
        let mut collection = store.load().await?;

        let added = match collection.push_question(question) {
            Ok(added) => added.clone(),
            Err(e) => {
                warn!("Rejected question: {}", e);
                return Err(e.into());
            }
        };

        store.save(&collection).await?;
        info!(
            "Added question {} ({} questions total)",
            added.id(),
            collection.len()
        );
        Ok(added)
    }

    /// Answers of a question in insertion order
    pub async fn get_answers(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, RepositoryError> {
        let question = self.get_question_by_id(question_id).await?;
        Ok(question.answers().to_vec())
    }

    /// A single answer. A missing question and a missing answer are reported
    /// as distinct not-found errors.
    pub async fn get_answer(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> Result<Answer, RepositoryError> {
        let store = self.store.read().await;
        let collection = store.load().await?;
        Ok(collection.answer(question_id, answer_id)?.clone())
    }

    /// Append an answer to an existing question and persist the whole collection
    pub async fn add_answer(
        &self,
        question_id: &QuestionId,
        answer: Answer,
    ) -> Result<Answer, RepositoryError> {
        let store = self.store.write().await;
        let mut collection = store.load().await?;

        let added = match collection.push_answer(question_id, answer) {
            Ok(added) => added.clone(),
            Err(e) => {
                warn!("Rejected answer: {}", e);
                return Err(e.into());
            }
        };

        store.save(&collection).await?;
        info!("Added answer {} to question {}", added.id, question_id);
        Ok(added)
    }
}
