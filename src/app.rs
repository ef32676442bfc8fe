use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::QuizError;
use crate::authoring;
use crate::console::Console;
use crate::data::{QuestionFile, StorageError};
use crate::models::{AppState, QuestionStore};
use crate::session::QuizSession;
use crate::ui::menu;

/// The menu loop. Owns the question store for the whole run.
pub struct App {
    pub state: AppState,
    store: QuestionStore,
    file: QuestionFile,
    rng: StdRng,
}

impl App {
    /// Load the store from `file` (or the defaults) and start at the menu.
    pub fn load(file: QuestionFile) -> Result<Self, StorageError> {
        let store = file.load()?;
        Ok(Self::with_store(store, file))
    }

    pub fn with_store(store: QuestionStore, file: QuestionFile) -> Self {
        Self {
            state: AppState::Menu,
            store,
            file,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for question shuffling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn file(&self) -> &QuestionFile {
        &self.file
    }

    /// Keep showing the menu until the user picks exit.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), QuizError> {
        while self.state != AppState::Exited {
            self.step(console)?;
        }
        Ok(())
    }

    /// Show the menu once, read a choice, and carry it out.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<AppState, QuizError> {
        menu::render(console)?;
        let choice = console.prompt(menu::CHOICE_PROMPT)?;
        debug!(%choice, "menu choice");

        match choice.as_str() {
            menu::PLAY => {
                self.state = AppState::Playing;
                self.play(console)?;
                self.state = AppState::Menu;
            }
            menu::ADD => {
                self.state = AppState::Adding;
                authoring::add_question(console, &mut self.store, &self.file)?;
                self.state = AppState::Menu;
            }
            menu::EXIT => self.state = AppState::Exited,
            _ => menu::render_invalid_choice(console)?,
        }

        Ok(self.state)
    }

    fn play<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), QuizError> {
        let session = QuizSession::shuffled(&self.store, &mut self.rng);
        session.play(console)?;
        Ok(())
    }
}
