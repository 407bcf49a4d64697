use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

mod commands;
mod game;
mod output;

use crate::game::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

#[derive(Parser)]
#[command(name = "dsa-quiz", version, about = "Multiple-choice quiz from a question bank")]
struct Cli {
    /// Question bank, two lines per question
    questions: Option<PathBuf>,

    /// Number of questions drawn from the bank
    #[arg(long)]
    sample_size: Option<usize>,

    /// Seed for drawing questions, for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(path) = &self.questions {
            settings.questions_path = path.clone();
        }
        if let Some(sample_size) = self.sample_size {
            settings.sample_size = sample_size;
        }
        settings
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let settings = cli.settings();
    info!("Starting quiz with {:?}", settings);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::start(&settings, &mut rng, TerminalOutput::new());
    let stdin = io::stdin();
    commands::run(&mut game, stdin.lock())
}
