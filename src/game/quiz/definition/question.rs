use log::{debug, warn};

use super::LoadError;

pub const OPTION_COUNT: usize = 4;
const FIELD_SEPARATOR: char = '|';

/// The two lines of text describing a single question, as found in the question bank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawQuestion {
    pub text: String,
    pub fields: String,
    pub line: usize,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_index: usize,
}

impl Question {
    pub fn is_answer_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }
}

impl RawQuestion {
    /// Turns a raw record into a question.
    ///
    /// Records that are malformed (missing fields, out of range answer index, blank text) are
    /// skipped and yield `Ok(None)`. An answer index that is not a number at all aborts loading.
    pub fn parse(self) -> Result<Option<Question>, LoadError> {
        let mut fields: Vec<&str> = self.fields.split(FIELD_SEPARATOR).collect();
        while fields.last().map_or(false, |f| f.is_empty()) {
            fields.pop();
        }

        if fields.len() < OPTION_COUNT + 1 {
            debug!(
                "Skipping question on line {}: expected {} fields, found {}",
                self.line,
                OPTION_COUNT + 1,
                fields.len()
            );
            return Ok(None);
        }

        let value = fields[OPTION_COUNT].trim();
        let one_based_index: i64 = value.parse().map_err(|_| LoadError::InvalidCorrectIndex {
            line: self.line,
            value: value.to_owned(),
        })?;
        if one_based_index < 1 || one_based_index > OPTION_COUNT as i64 {
            warn!(
                "Skipping question on line {}: correct answer {} is not between 1 and {}",
                self.line, one_based_index, OPTION_COUNT
            );
            return Ok(None);
        }

        if self.text.trim().is_empty() {
            warn!("Skipping question on line {}: question text is blank", self.line - 1);
            return Ok(None);
        }

        let options = [
            fields[0].to_owned(),
            fields[1].to_owned(),
            fields[2].to_owned(),
            fields[3].to_owned(),
        ];

        Ok(Some(Question {
            text: self.text,
            options,
            correct_index: (one_based_index - 1) as usize,
        }))
    }
}
