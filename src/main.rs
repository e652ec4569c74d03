use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use crate::input::LineInput;
use crate::output::TerminalOutput;
use crate::quiz::Quiz;
use crate::settings::Settings;

mod definition;
mod input;
mod output;
mod quiz;
mod settings;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let settings = Settings::default();
    tracing::debug!(
        "Reading questions from {}",
        settings.questions_dir.display()
    );

    let output = TerminalOutput::new(settings.color);
    let quiz = Quiz::new(
        &settings,
        output,
        LineInput::stdin(),
        StdRng::from_entropy(),
    );
    match quiz.run() {
        Ok(outcome) => tracing::debug!("Quiz ended: {:?}", outcome),
        Err(e) => eprintln!("Quiz ended early: {:#}", e),
    }
}
