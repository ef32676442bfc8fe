/// Where the menu loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Showing the menu and waiting for a choice.
    #[default]
    Menu,
    /// Running one quiz session.
    Playing,
    /// Collecting one new question.
    Adding,
    /// The user chose to exit.
    Exited,
}
