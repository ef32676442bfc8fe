//! Interactive entry of a new question.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::QuizError;
use crate::console::Console;
use crate::data::QuestionFile;
use crate::models::{OPTION_LABELS, Question, QuestionStore};

pub const QUESTION_PROMPT: &str = "Enter the question: ";
pub const ANSWER_PROMPT: &str = "Enter the correct answer (A/B/C/D): ";

/// Prompt for the question text, the four options, and the answer label.
///
/// Values are taken exactly as typed. An empty question or an answer that
/// is not one of A-D is accepted.
pub fn read_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(String, Question), QuizError> {
    let text = console.prompt(QUESTION_PROMPT)?;

    let mut options: [String; 4] = Default::default();
    for (label, option) in OPTION_LABELS.iter().zip(options.iter_mut()) {
        *option = console.prompt(&format!("Enter option {}: ", label))?;
    }
    let [a, b, c, d] = options;

    let answer = console.prompt(ANSWER_PROMPT)?;
    Ok((text, Question::new(a, b, c, d, answer)))
}

/// Read a question, store it, and rewrite the backing file.
///
/// The store is updated before saving, so a failed save leaves the new
/// question in memory but not on disk.
pub fn add_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut QuestionStore,
    file: &QuestionFile,
) -> Result<(), QuizError> {
    let (text, question) = read_question(console)?;

    if !question.has_valid_answer() {
        warn!(
            question = %text,
            answer = %question.answer,
            "answer label is not one of A/B/C/D"
        );
    }

    if store.upsert(text.as_str(), question).is_some() {
        info!(question = %text, "replaced existing question");
    } else {
        info!(question = %text, "added question");
    }

    file.save(store)?;
    Ok(())
}
