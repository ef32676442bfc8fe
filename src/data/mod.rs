mod defaults;
mod storage;

pub use defaults::default_questions;
pub use storage::{DEFAULT_QUESTIONS_PATH, QuestionFile, StorageError};
