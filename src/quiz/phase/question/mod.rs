use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::definition::Question;
use crate::output::{Message, QuizOutput};
use crate::quiz::State;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessResult {
    pub choice: usize,
    pub is_correct: bool,
}

pub struct QuestionState<O: QuizOutput> {
    question: Question,
    number: usize,
    options: Vec<String>,
    guess: Option<GuessResult>,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new<R: Rng + ?Sized>(question: Question, number: usize, rng: &mut R, output: O) -> Self {
        let mut options = question.options();
        options.shuffle(rng);
        QuestionState {
            question,
            number,
            options,
            guess: None,
            output,
        }
    }

    pub fn get_options(&self) -> &Vec<String> {
        &self.options
    }

    /// 1-based position of the first option equal to the correct answer.
    pub fn correct_choice(&self) -> usize {
        self.options
            .iter()
            .position(|option| *option == self.question.answer)
            .map_or(self.options.len(), |index| index + 1)
    }

    pub fn guess(&mut self, choice: usize) -> Result<GuessResult> {
        if self.guess.is_some() {
            return Err(anyhow!("Question was already answered"));
        }
        if choice < 1 || choice > self.options.len() {
            return Err(anyhow!("There is no option {}", choice));
        }

        let guess_result = GuessResult {
            choice,
            is_correct: choice == self.correct_choice(),
        };
        self.guess = Some(guess_result.clone());

        if guess_result.is_correct {
            self.output.say(&Message::AnswerCorrect);
        } else {
            self.output
                .say(&Message::AnswerIncorrect(self.question.answer.clone()));
        }

        Ok(guess_result)
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(
            self.number,
            self.question.prompt.clone(),
            self.options.clone(),
        ));
    }

    fn on_end(&mut self) {
        if let Some(explanation) = &self.question.explanation {
            self.output.say(&Message::Explanation(explanation.clone()));
        }
        self.output.say(&Message::QuestionEnds);
    }
}
