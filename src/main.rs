use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use batch_quiz::{DEFAULT_QUESTIONS_PATH, Mode, Quiz, QuizError, SessionState};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "batch_quiz=info";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Mode to start in: full, batch-1, batch-2, batch-3 or review
    #[arg(short, long, default_value_t = Mode::Full)]
    mode: Mode,

    /// Show the correct answer after each submission
    #[arg(long)]
    show_correct: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let session = SessionState::with_preferences(args.mode, args.show_correct);
    let quiz = Quiz::from_json(&args.questions, session)?;
    quiz.run()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
