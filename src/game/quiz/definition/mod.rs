use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod question;

pub use question::{Question, RawQuestion, OPTION_COUNT};


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("could not read line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("line {line}: correct answer `{value}` is not a number")]
    InvalidCorrectIndex { line: usize, value: String },
}

/// Every valid question found in a question bank, in file order.
#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, LoadError> {
        let file = File::open(source).map_err(|source_error| LoadError::Open {
            path: source.to_path_buf(),
            source: source_error,
        })?;
        QuizDefinition::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<QuizDefinition, LoadError> {
        let mut questions = Vec::new();
        let mut lines = reader
            .split(b'\n')
            .map(|line| line.map(decode_line))
            .enumerate();

        while let Some((index, text)) = lines.next() {
            let text = text.map_err(|source| LoadError::Read {
                line: index + 1,
                source,
            })?;

            let (index, fields) = match lines.next() {
                Some((index, fields)) => (index, fields),
                None => {
                    debug!("Dropping truncated question on line {}", index + 1);
                    break;
                }
            };
            let fields = fields.map_err(|source| LoadError::Read {
                line: index + 1,
                source,
            })?;

            let raw_question = RawQuestion {
                text,
                fields,
                line: index + 1,
            };
            if let Some(question) = raw_question.parse()? {
                questions.push(question);
            }
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    /// Shuffles the whole bank and keeps at most `count` questions.
    pub fn sample<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<Question> {
        let mut questions = self.questions;
        questions.shuffle(rng);
        questions.truncate(count);
        questions
    }
}

/// Undecodable bytes become U+FFFD rather than failing the whole bank.
fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn load<R: Rng + ?Sized>(
    source: &Path,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<Question>, LoadError> {
    let definition = QuizDefinition::open(source)?;
    let bank_size = definition.get_questions().len();
    let questions = definition.sample(sample_size, rng);
    info!(
        "Loaded {} random questions out of {} from {}",
        questions.len(),
        bank_size,
        source.display()
    );
    Ok(questions)
}
