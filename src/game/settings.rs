use std::path::PathBuf;

pub const DEFAULT_QUESTIONS_PATH: &'static str = "assets/quiz_questions.txt";

#[derive(Clone, Debug)]
pub struct Settings {
    pub questions_path: PathBuf,
    pub sample_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            sample_size: 5,
        }
    }
}
