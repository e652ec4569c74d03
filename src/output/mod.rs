use anyhow::Result;
use crossterm::style::Stylize;
use std::path::PathBuf;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use terminal::TerminalOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerCorrect,
    AnswerIncorrect(String),
    Explanation(String),
    InputClosed,
    InvalidChoice(Prompt),
    NoQuestions,
    NoTopics(PathBuf),
    QuestionBegins(usize, String, Vec<String>),
    QuestionEnds,
    QuizResults(usize, usize),
    SourceMissing(PathBuf),
    SourceUnreadable(PathBuf, String),
    TopicEmpty(String),
    TopicMenu(Vec<(String, usize)>),
}

/// A request for a number between 1 and the carried upper bound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Prompt {
    Topic(usize),
    QuestionCount(usize),
    Answer(usize),
}

impl Prompt {
    pub fn max(&self) -> usize {
        match self {
            Prompt::Topic(max) | Prompt::QuestionCount(max) | Prompt::Answer(max) => *max,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Emphasis {
    Correct,
    Incorrect,
}

pub fn emphasize(text: &str, emphasis: Emphasis, color: bool) -> String {
    if !color {
        return text.to_owned();
    }
    match emphasis {
        Emphasis::Correct => text.green().to_string(),
        Emphasis::Incorrect => text.red().to_string(),
    }
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);

    fn prompt(&mut self, prompt: &Prompt) -> Result<()>;
}
