use anyhow::Result;
use log::{debug, error, info, warn};
use rand::Rng;

pub mod quiz;
pub mod settings;

use crate::game::quiz::definition::{self, LoadError};
use crate::game::quiz::QuizSession;
use crate::game::settings::Settings;
use crate::output::{Message, QuizOutput};


/// User intents forwarded by the input loop.
pub trait QuizEvents {
    fn on_advance(&mut self, selection: Option<usize>) -> Result<()>;
    fn on_restart(&mut self);
    fn on_exit(&mut self);
    fn on_invalid_input(&mut self, input: &str);
}

pub struct Game<O: QuizOutput> {
    session: QuizSession,
    output: O,
    exited: bool,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(session: QuizSession, output: O) -> Game<O> {
        Game {
            session,
            output,
            exited: false,
        }
    }

    /// Loads and samples the question bank. A bank that cannot be loaded is reported and
    /// replaced by an empty quiz.
    pub fn start<R: Rng + ?Sized>(settings: &Settings, rng: &mut R, output: O) -> Game<O> {
        let questions =
            match definition::load(&settings.questions_path, settings.sample_size, rng) {
                Ok(questions) => questions,
                Err(e) => {
                    error!("{}", e);
                    Self::report_load_error(&output, &e);
                    Vec::new()
                }
            };
        Game::new(QuizSession::new(questions), output)
    }

    fn report_load_error(output: &O, load_error: &LoadError) {
        output.say(&Message::LoadFailed(load_error.to_string()));
    }

    pub fn begin(&mut self) {
        if self.session.is_empty() {
            warn!("Quiz has no questions");
        } else {
            let order: Vec<&str> = self
                .session
                .get_questions()
                .iter()
                .map(|q| q.text.as_str())
                .collect();
            debug!("Question order: {:?}", order);
        }
        self.announce();
    }

    pub fn get_session(&self) -> &QuizSession {
        &self.session
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    fn announce(&self) {
        match self.session.current_question() {
            Ok(question) => {
                let (number, total) = self.session.progress();
                self.output.say(&Message::QuestionBegins {
                    number,
                    total,
                    question: question.clone(),
                    score: self.session.score(),
                    is_last: self.session.is_last_question(),
                });
            }
            Err(_) => {
                self.output.say(&Message::QuizResults(
                    self.session.score(),
                    self.session.len(),
                ));
            }
        }
    }
}

impl<O: QuizOutput> QuizEvents for Game<O> {
    fn on_advance(&mut self, selection: Option<usize>) -> Result<()> {
        let selected_index = match selection {
            Some(index) => index,
            None => {
                self.output.say(&Message::NoSelection);
                return Ok(());
            }
        };

        let outcome = self.session.submit_answer(selected_index)?;
        if outcome.is_correct {
            debug!("Correct answer, score is now {}", outcome.score);
        } else {
            debug!("Wrong answer, score stays at {}", outcome.score);
        }
        if outcome.is_finished {
            info!("Quiz finished with {}/{}", outcome.score, self.session.len());
        }
        self.announce();
        Ok(())
    }

    fn on_restart(&mut self) {
        self.session.restart();
        self.announce();
    }

    fn on_exit(&mut self) {
        debug!(
            "Leaving quiz in phase {:?} with score {}/{}",
            self.session.get_phase(),
            self.session.score(),
            self.session.len()
        );
        self.exited = true;
    }

    fn on_invalid_input(&mut self, input: &str) {
        if self.session.is_finished() {
            self.output.say(&Message::InvalidChoice(input.to_owned()));
        } else {
            self.output.say(&Message::InvalidSelection(input.to_owned()));
        }
    }
}
