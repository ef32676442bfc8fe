use crate::models::{Question, QuestionStore};

/// The three questions a fresh install starts with.
pub fn default_questions() -> QuestionStore {
    [
        (
            "What is the capital of France?",
            Question::new("Paris", "London", "Berlin", "Rome", "A"),
        ),
        (
            "Who painted the Mona Lisa?",
            Question::new(
                "Leonardo da Vinci",
                "Michelangelo",
                "Raphael",
                "Caravaggio",
                "A",
            ),
        ),
        (
            "What is the largest planet in our solar system?",
            Question::new("Earth", "Saturn", "Jupiter", "Uranus", "C"),
        ),
    ]
    .into_iter()
    .collect()
}
