use crate::game::quiz::definition::Question;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    InvalidChoice(String),
    InvalidSelection(String),
    LoadFailed(String),
    NoSelection,
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
        score: usize,
        is_last: bool,
    },
    QuizResults(usize, usize),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
