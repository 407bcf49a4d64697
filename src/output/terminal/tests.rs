use super::*;
use crate::game::quiz::definition::Question;

fn example_question() -> Question {
    Question {
        text: "Which data structure is LIFO?".to_owned(),
        options: [
            "Queue".to_owned(),
            "Stack".to_owned(),
            "Heap".to_owned(),
            "Trie".to_owned(),
        ],
        correct_index: 1,
    }
}

fn render(message: &Message) -> String {
    let output = TerminalOutput::with_writer(Vec::new());
    output.say(message);
    let bytes = output.writer.lock().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn renders_question_with_progress_and_score() {
    let text = render(&Message::QuestionBegins {
        number: 1,
        total: 2,
        question: example_question(),
        score: 0,
        is_last: false,
    });
    assert!(text.contains("Question 1/2"));
    assert!(text.contains("Score: 0"));
    assert!(text.contains("1. Which data structure is LIFO?"));
    assert!(text.contains("  2) Stack"));
    assert!(text.contains("  4) Trie"));
    assert!(text.contains("[Next]"));
}

#[test]
fn last_question_offers_submit() {
    let text = render(&Message::QuestionBegins {
        number: 2,
        total: 2,
        question: example_question(),
        score: 1,
        is_last: true,
    });
    assert!(text.contains("[Submit]"));
    assert!(!text.contains("[Next]"));
}

#[test]
fn renders_results() {
    let text = render(&Message::QuizResults(3, 5));
    assert!(text.contains("You scored 3 out of 5."));
    assert!(text.contains("restart"));
}

#[test]
fn renders_missing_selection_warning() {
    let text = render(&Message::NoSelection);
    assert_eq!(text, "Please select an option before proceeding.\n");
}

#[test]
fn renders_load_failure_as_plain_text() {
    let text = render(&Message::LoadFailed("could not open bank.txt".to_owned()));
    assert_eq!(
        text,
        "File Error: Error reading question file: could not open bank.txt\n"
    );
}
