use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::{self, Write};

use crate::output::{emphasize, Emphasis, Message, Prompt, QuizOutput};

#[derive(Clone, Debug)]
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    pub fn new(color: bool) -> Self {
        TerminalOutput { color }
    }

    pub fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerCorrect => emphasize("Correct!", Emphasis::Correct, self.color),
            AnswerIncorrect(answer) => emphasize(
                &format!("Incorrect. The correct answer is {}.", answer),
                Emphasis::Incorrect,
                self.color,
            ),
            Explanation(explanation) => format!("Explanation: {}", explanation),
            InputClosed => "Input closed, ending the quiz.".into(),
            InvalidChoice(Prompt::QuestionCount(_)) => {
                "Please enter a valid number within range.".into()
            }
            InvalidChoice(_) => "Please enter a valid option number.".into(),
            NoQuestions => "No questions available to run the quiz.".into(),
            NoTopics(directory) => format!(
                "No topics found: there are no question files in {}.",
                directory.display()
            ),
            QuestionBegins(number, prompt, options) => {
                let options = options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| format!("  {}. {}", index + 1, option))
                    .join("\n");
                format!("Question {}: {}\n{}", number, prompt, options)
            }
            QuestionEnds => String::new(),
            QuizResults(score, total) => {
                format!("Quiz complete! Your final score: {}/{}", score, total)
            }
            SourceMissing(path) => format!("Unable to find {}.", path.display()),
            SourceUnreadable(path, reason) => {
                format!("Unable to read {}: {}", path.display(), reason)
            }
            TopicEmpty(name) => format!("No questions available for topic {}.", name),
            TopicMenu(topics) => {
                let mut menu = "Available topics:".to_owned();
                for (index, (name, count)) in topics.iter().enumerate() {
                    let unit = if *count == 1 { "question" } else { "questions" };
                    menu += &format!("\n  {}. {} ({} {})", index + 1, name, count, unit);
                }
                menu
            }
        }
    }

    fn interpret_prompt(prompt: &Prompt) -> String {
        match prompt {
            Prompt::Topic(max) => format!("Choose a topic (1-{}): ", max),
            Prompt::QuestionCount(max) => {
                format!("How many questions would you like? (1-{}): ", max)
            }
            Prompt::Answer(_) => "Your answer (enter the option number): ".into(),
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&mut self, message: &Message) {
        let text = self.interpret_message(message);
        if let Err(e) = writeln!(io::stdout(), "{}", text) {
            tracing::warn!("Could not write to stdout: {}", e);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", TerminalOutput::interpret_prompt(prompt))
            .and_then(|_| stdout.flush())
            .context("could not write prompt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TerminalOutput {
        TerminalOutput::new(false)
    }

    #[test]
    fn lists_options_from_one() {
        let message = Message::QuestionBegins(
            2,
            "2+2?".to_owned(),
            vec!["3".to_owned(), "4".to_owned()],
        );
        assert_eq!(
            plain().interpret_message(&message),
            "Question 2: 2+2?\n  1. 3\n  2. 4"
        );
    }

    #[test]
    fn incorrect_answer_reveals_solution() {
        let text = plain().interpret_message(&Message::AnswerIncorrect("4".to_owned()));
        assert_eq!(text, "Incorrect. The correct answer is 4.");
    }

    #[test]
    fn prints_final_score() {
        let text = plain().interpret_message(&Message::QuizResults(1, 3));
        assert_eq!(text, "Quiz complete! Your final score: 1/3");
    }

    #[test]
    fn annotates_topics_with_counts() {
        let topics = vec![("All".to_owned(), 3), ("math".to_owned(), 1)];
        let message = Message::TopicMenu(topics);
        assert_eq!(
            plain().interpret_message(&message),
            "Available topics:\n  1. All (3 questions)\n  2. math (1 question)"
        );
    }

    #[test]
    fn forced_color_styles_feedback() {
        let output = TerminalOutput::new(true);
        let text = output.interpret_message(&Message::AnswerCorrect);
        assert!(text.contains("Correct!"));
        if std::env::var_os("NO_COLOR").is_none() {
            assert_ne!(text, "Correct!");
        }
    }
}
