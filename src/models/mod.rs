mod question;
mod state;
mod store;

pub use question::{OPTION_LABELS, Question};
pub use state::AppState;
pub use store::QuestionStore;
