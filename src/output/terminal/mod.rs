use log::error;
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

use crate::game::quiz::definition::OPTION_COUNT;
use crate::output::{Message, QuizOutput};

#[cfg(test)]
mod tests;

/// Renders quiz messages as plain text on any writer, stdout by default.
#[derive(Debug)]
pub struct TerminalOutput<W: Write = Stdout> {
    writer: Mutex<W>,
}

impl TerminalOutput<Stdout> {
    pub fn new() -> Self {
        TerminalOutput::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        TerminalOutput {
            writer: Mutex::new(writer),
        }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            LoadFailed(reason) => format!("File Error: Error reading question file: {}", reason),
            QuestionBegins {
                number,
                total,
                question,
                score,
                is_last,
            } => {
                let mut text = format!("\nQuestion {}/{}    Score: {}\n", number, total, score);
                text += &format!("{}. {}", number, question.text);
                for (index, option) in question.options.iter().enumerate() {
                    text += &format!("\n  {}) {}", index + 1, option);
                }
                let action = if *is_last { "Submit" } else { "Next" };
                text += &format!("\n[{}] Pick an option (1-{}):", action, OPTION_COUNT);
                text
            }
            NoSelection => "Please select an option before proceeding.".into(),
            InvalidSelection(input) => format!(
                "`{}` is not an option. Please enter a number between 1 and {}.",
                input, OPTION_COUNT
            ),
            QuizResults(score, total) => format!(
                "\nQuiz Finished\nYou scored {} out of {}.\nWould you like to restart the quiz? [Restart/Exit]",
                score, total
            ),
            InvalidChoice(input) => format!(
                "`{}` is not a valid choice. Please type `restart` or `exit`.",
                input
            ),
        }
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            error!("Could not write to terminal: {}", e);
        }
    }
}
