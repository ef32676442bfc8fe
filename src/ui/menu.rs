use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};

pub const PLAY: &str = "1";
pub const ADD: &str = "2";
pub const EXIT: &str = "3";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

const ENTRIES: [(&str, &str); 3] = [(PLAY, "Play Quiz"), (ADD, "Add Question"), (EXIT, "Exit")];

pub fn render<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    for (key, label) in ENTRIES {
        console.line(format_args!("{}. {}", key, label))?;
    }
    Ok(())
}

pub fn render_invalid_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.toned(Tone::Failure, INVALID_CHOICE)
}
