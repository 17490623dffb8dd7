use clap::Parser;
use log::info;
use std::error::Error;
use std::io::{stdin, stdout};
use std::process::ExitCode;
use wordguess::config::{Cli, Settings};
use wordguess::{SessionController, WordBank};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(Settings::from(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> Result<(), Box<dyn Error>> {
    let bank = WordBank::builtin()?;
    let mut session = SessionController::new(
        stdin().lock(),
        stdout().lock(),
        settings.score_store(),
        bank,
        settings.rng(),
    );

    let summary = session.run_round()?;
    info!(
        "round over: {:?} on {} ({})",
        summary.status, summary.difficulty, summary.word
    );
    Ok(())
}
