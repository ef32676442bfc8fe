use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use quizbook::{DEFAULT_QUESTIONS_PATH, Quiz};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load questions from and save new ones to
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizbook=warn")),
        )
        .init();

    let args = Args::parse();
    let styled = !args.no_color && io::stdout().is_terminal();

    let result = Quiz::from_json(&args.questions).and_then(|quiz| quiz.styled(styled).run());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
