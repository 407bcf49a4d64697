use anyhow::{anyhow, Result};
use log::debug;

use self::definition::{Question, OPTION_COUNT};

pub mod definition;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    InProgress(usize),
    Finished,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub score: usize,
    pub is_finished: bool,
}

/// One run through a fixed sequence of questions.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_phase: Phase,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> QuizSession {
        let current_phase = QuizSession::initial_phase(&questions);
        QuizSession {
            questions,
            current_phase,
            score: 0,
        }
    }

    fn initial_phase(questions: &[Question]) -> Phase {
        if questions.is_empty() {
            Phase::Finished
        } else {
            Phase::InProgress(0)
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    pub fn get_phase(&self) -> Phase {
        self.current_phase
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current_phase == Phase::Finished
    }

    pub fn is_last_question(&self) -> bool {
        match self.current_phase {
            Phase::InProgress(index) => index + 1 == self.questions.len(),
            Phase::Finished => false,
        }
    }

    pub fn current_question(&self) -> Result<&Question> {
        match self.current_phase {
            Phase::InProgress(index) => self
                .questions
                .get(index)
                .ok_or_else(|| anyhow!("Question {} does not exist", index + 1)),
            Phase::Finished => Err(anyhow!("There is no active question")),
        }
    }

    pub fn submit_answer(&mut self, selected_index: usize) -> Result<AnswerOutcome> {
        if selected_index >= OPTION_COUNT {
            return Err(anyhow!(
                "Option {} does not exist, pick one between 1 and {}",
                selected_index + 1,
                OPTION_COUNT
            ));
        }

        let index = match self.current_phase {
            Phase::InProgress(index) => index,
            Phase::Finished => return Err(anyhow!("There is no active question")),
        };

        let is_correct = self.current_question()?.is_answer_correct(selected_index);
        if is_correct {
            self.score += 1;
        }

        if index + 1 < self.questions.len() {
            self.set_current_phase(Phase::InProgress(index + 1));
        } else {
            self.set_current_phase(Phase::Finished);
        }

        Ok(AnswerOutcome {
            is_correct,
            score: self.score,
            is_finished: self.is_finished(),
        })
    }

    /// Replays the same questions, in the same order, from the beginning.
    pub fn restart(&mut self) {
        self.score = 0;
        let phase = QuizSession::initial_phase(&self.questions);
        self.set_current_phase(phase);
    }

    /// Question number (1-based) and question count, for display.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        match self.current_phase {
            Phase::InProgress(index) => (index + 1, total),
            Phase::Finished => (total, total),
        }
    }
}
