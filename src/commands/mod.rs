use anyhow::{Context, Result};
use log::{debug, error};
use std::io::BufRead;

use crate::game::quiz::definition::OPTION_COUNT;
use crate::game::{Game, QuizEvents};
use crate::output::QuizOutput;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Answer(Option<usize>),
    Restart,
    Exit,
    Invalid(String),
}

/// Reads a line typed while a question is on screen.
pub fn parse_answer(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => Command::Answer(None),
        "q" | "quit" | "exit" => Command::Exit,
        other => match other.parse::<usize>() {
            Ok(number) if number >= 1 && number <= OPTION_COUNT => {
                Command::Answer(Some(number - 1))
            }
            _ => Command::Invalid(input.to_owned()),
        },
    }
}

/// Reads a line typed once the results are on screen. Restart is the default choice.
pub fn parse_results_choice(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" | "r" | "restart" | "y" | "yes" => Command::Restart,
        "e" | "exit" | "n" | "no" | "q" | "quit" => Command::Exit,
        _ => Command::Invalid(input.to_owned()),
    }
}

pub fn dispatch<E: QuizEvents>(events: &mut E, command: Command) -> Result<()> {
    match command {
        Command::Answer(selection) => events.on_advance(selection)?,
        Command::Restart => events.on_restart(),
        Command::Exit => events.on_exit(),
        Command::Invalid(input) => events.on_invalid_input(&input),
    };
    Ok(())
}

/// Feeds every line of `input` to the game until the player leaves or input runs out.
pub fn run<O: QuizOutput, R: BufRead>(game: &mut Game<O>, input: R) -> Result<()> {
    game.begin();
    for line in input.lines() {
        let line = line.context("Could not read player input")?;
        let command = if game.get_session().is_finished() {
            parse_results_choice(&line)
        } else {
            parse_answer(&line)
        };
        debug!("Received command: {:?}", command);

        if let Err(e) = dispatch(game, command) {
            error!("{:#}", e);
        }
        if game.is_exited() {
            return Ok(());
        }
    }
    game.on_exit();
    Ok(())
}
