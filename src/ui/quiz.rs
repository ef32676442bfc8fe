use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};
use crate::models::Question;

pub const ANSWER_PROMPT: &str = "Enter your answer (A/B/C/D): ";

pub fn render_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
    question: &Question,
) -> io::Result<()> {
    console.toned(Tone::Heading, text)?;
    for (label, option) in question.options() {
        console.line(format_args!("{}: {}", label, option))?;
    }
    Ok(())
}

/// Feedback after an answer, followed by a blank separator line.
pub fn render_feedback<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &Question,
    correct: bool,
) -> io::Result<()> {
    if correct {
        console.toned(Tone::Success, "Correct!")?;
    } else {
        let message = format!("Incorrect. The correct answer is {}.", question.answer);
        console.toned(Tone::Failure, &message)?;
    }
    console.blank()
}
