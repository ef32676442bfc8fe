use std::io::{self, BufRead, Write};

use crate::console::{Console, Tone};
use crate::session::Score;

pub fn render<R: BufRead, W: Write>(console: &mut Console<R, W>, score: Score) -> io::Result<()> {
    let summary = format!("Quiz finished. Your score is {}", score);
    console.toned(Tone::Heading, &summary)
}
