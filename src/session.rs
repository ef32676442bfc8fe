//! One run through every question in the store.

use std::fmt;
use std::io::{BufRead, Write};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::QuizError;
use crate::console::Console;
use crate::models::QuestionStore;
use crate::ui;

/// Final result of a session, displayed as `correct/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

pub struct QuizSession<'a> {
    store: &'a QuestionStore,
    order: Vec<&'a str>,
}

impl<'a> QuizSession<'a> {
    /// A session over the store with a uniformly random question order.
    pub fn shuffled<G: Rng + ?Sized>(store: &'a QuestionStore, rng: &mut G) -> Self {
        let mut order = store.texts();
        order.shuffle(rng);
        debug!(?order, "shuffled questions");
        Self { store, order }
    }

    /// A session that asks questions in exactly the given order.
    ///
    /// Texts missing from the store are skipped when playing.
    pub fn with_order(store: &'a QuestionStore, order: Vec<&'a str>) -> Self {
        Self { store, order }
    }

    pub fn order(&self) -> &[&'a str] {
        &self.order
    }

    /// Ask every question once and report the score.
    ///
    /// Any input that does not match the stored answer counts as wrong;
    /// nothing is re-prompted.
    pub fn play<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Score, QuizError> {
        let mut score = Score {
            correct: 0,
            total: self.store.len(),
        };

        for text in &self.order {
            let Some(question) = self.store.get(text) else {
                continue;
            };

            ui::quiz::render_question(console, text, question)?;
            let input = console.prompt(ui::quiz::ANSWER_PROMPT)?;
            let correct = question.is_correct(&input);
            if correct {
                score.correct += 1;
            }
            ui::quiz::render_feedback(console, question, correct)?;
        }

        ui::result::render(console, score)?;
        Ok(score)
    }
}
