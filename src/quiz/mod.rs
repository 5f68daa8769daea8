//! Quiz content and practice sessions

pub mod question;
pub mod session;

pub use question::{default_question_bank, Difficulty, Question, QuestionBank};
pub use session::{AttemptSummary, PracticeSession};
