use crate::output::{Message, QuizOutput};
use crate::quiz::State;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct ResultsState<O> {
    score: usize,
    total: usize,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(score: usize, total: usize, output: O) -> Self {
        ResultsState {
            score,
            total,
            output,
        }
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output
            .say(&Message::QuizResults(self.score, self.total));
    }

    fn on_end(&mut self) {}
}
