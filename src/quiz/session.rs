use crate::definition::Question;

/// Questions picked for one run, with progress and score.
#[derive(Clone, Debug)]
pub struct Session {
    topic: String,
    questions: Vec<Question>,
    index: usize,
    score: usize,
}

impl Session {
    /// Keeps the first `count` questions, in their current order.
    pub fn new(topic: &str, mut questions: Vec<Question>, count: usize) -> Self {
        questions.truncate(count);
        Session {
            topic: topic.to_owned(),
            questions,
            index: 0,
            score: 0,
        }
    }

    pub fn get_topic(&self) -> &str {
        &self.topic
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// 1-based position of the current question.
    pub fn current_number(&self) -> usize {
        self.index + 1
    }

    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.score += 1;
        }
        self.index += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn get_score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new("a?", "a", &[]),
            Question::new("b?", "b", &[]),
            Question::new("c?", "c", &[]),
        ]
    }

    #[test]
    fn truncates_keeping_order() {
        let session = Session::new("letters", questions(), 2);
        let prompts: Vec<&str> = session
            .questions
            .iter()
            .map(|q| q.prompt.as_str())
            .collect();
        assert_eq!(prompts, vec!["a?", "b?"]);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn records_progress_and_score() {
        let mut session = Session::new("letters", questions(), 3);
        assert_eq!(session.current_number(), 1);
        session.record(true);
        session.record(false);
        assert_eq!(session.current_question().unwrap().prompt, "c?");
        assert!(!session.is_finished());
        session.record(true);
        assert!(session.is_finished());
        assert!(session.current_question().is_none());
        assert_eq!(session.get_score(), 2);
    }
}
