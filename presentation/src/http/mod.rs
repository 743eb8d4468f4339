//! HTTP API for the question collection
//!
//! | Route | Repository call |
//! |---|---|
//! | `GET /questions` | `get_questions` |
//! | `POST /questions` | `add_question` |
//! | `GET /questions/:id` | `get_question_by_id` |
//! | `GET /questions/:id/answers` | `get_answers` |
//! | `POST /questions/:id/answers` | `add_answer` |
//! | `GET /questions/:id/answers/:aid` | `get_answer` |

mod dto;
mod error;
mod extract;
mod router;

pub use dto::{NewAnswerRequest, NewQuestionRequest};
pub use error::ApiError;
pub use extract::Payload;
pub use router::{router, serve};
