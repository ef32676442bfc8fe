//! # quizbook
//!
//! A line-based multiple-choice quiz for the terminal. Questions live in a
//! JSON file; users can play them in shuffled order or add new ones.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizbook::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions, falling back to the built-in set
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Show the menu on stdin/stdout until the user exits
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod authoring;
pub mod console;
mod data;
mod models;
pub mod session;
mod ui;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use app::App;
pub use authoring::{add_question, read_question};
pub use data::{DEFAULT_QUESTIONS_PATH, QuestionFile, StorageError, default_questions};
pub use models::{AppState, OPTION_LABELS, Question, QuestionStore};
pub use session::{QuizSession, Score};

use console::StdConsole;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading or writing the question file failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// IO error on the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a prompt was waiting.
    #[error("input closed while waiting for a response")]
    InputClosed,
}

/// A quiz bound to a question file, ready to run on stdin/stdout.
pub struct Quiz {
    app: App,
    styled: bool,
}

impl Quiz {
    /// Create a new quiz from an already loaded store.
    ///
    /// Questions added while running are saved to `file`.
    pub fn new(store: QuestionStore, file: QuestionFile) -> Self {
        Self {
            app: App::with_store(store, file),
            styled: false,
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// A missing file is not an error: the quiz starts with the built-in
    /// questions and the file is created on the first added question.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quizbook::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let app = App::load(QuestionFile::new(path))?;
        Ok(Self { app, styled: false })
    }

    /// Color feedback and headings.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Run the menu loop on stdin/stdout until the user picks exit.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut console = StdConsole::stdio(self.styled);
        self.app.run(&mut console)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
