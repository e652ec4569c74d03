use super::*;
use crate::output::mock::MockQuizOutput;

#[test]
fn announces_final_score() {
    let output = MockQuizOutput::new();
    let mut state = ResultsState::new(2, 5, output.clone());
    state.on_begin();
    state.on_end();
    assert_eq!(output.flush(), [Message::QuizResults(2, 5)]);
}
