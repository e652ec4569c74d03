use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;

use self::phase::*;
use self::session::Session;
use crate::definition::{self, Topic, TopicCatalog};
use crate::input::{self, QuizInput};
use crate::output::{Message, Prompt, QuizOutput};
use crate::settings::Settings;

mod phase;
pub mod session;


trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AbortReason {
    NoTopics,
    NoQuestions,
    EmptyTopic(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Complete { score: usize, total: usize },
    Aborted(AbortReason),
}

enum Phase {
    Idle,
    TopicsLoaded(TopicCatalog),
    TopicSelected(Topic),
    QuestionCountChosen(Session),
    Presenting(Session),
    Complete(Session),
    Aborted(AbortReason),
}

impl Phase {
    fn name(&self) -> String {
        match self {
            Phase::Idle => "Idle".into(),
            Phase::TopicsLoaded(_) => "TopicsLoaded".into(),
            Phase::TopicSelected(t) => format!("TopicSelected({})", t.name),
            Phase::QuestionCountChosen(_) => "QuestionCountChosen".into(),
            Phase::Presenting(s) => {
                format!("Presenting({}, {})", s.get_topic(), s.current_number())
            }
            Phase::Complete(_) => "Complete".into(),
            Phase::Aborted(reason) => format!("Aborted({:?})", reason),
        }
    }
}

pub struct Quiz<O, I, R> {
    questions_dir: PathBuf,
    current_phase: Phase,
    output: O,
    input: I,
    rng: R,
}

impl<O, I, R> Quiz<O, I, R>
where
    O: QuizOutput + Clone,
    I: QuizInput,
    R: Rng,
{
    pub fn new(settings: &Settings, output: O, input: I, rng: R) -> Self {
        Quiz {
            questions_dir: settings.questions_dir.clone(),
            current_phase: Phase::Idle,
            output,
            input,
            rng,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match &self.current_phase {
            Phase::Complete(session) => Some(Outcome::Complete {
                score: session.get_score(),
                total: session.total(),
            }),
            Phase::Aborted(reason) => Some(Outcome::Aborted(reason.clone())),
            _ => None,
        }
    }

    /// Drives the quiz from topic discovery to the final score.
    pub fn run(mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.advance()?;
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        tracing::debug!("Entering quiz phase: {}", phase.name());
        self.current_phase = phase;
    }

    fn advance(&mut self) -> Result<()> {
        let phase = std::mem::replace(&mut self.current_phase, Phase::Idle);
        let next_phase = match phase {
            Phase::Idle => self.load_topics(),
            Phase::TopicsLoaded(catalog) => {
                let topic = choose_topic(&catalog, &mut self.input, &mut self.output)?;
                if topic.questions.is_empty() {
                    self.output.say(&Message::TopicEmpty(topic.name.clone()));
                    Phase::Aborted(AbortReason::EmptyTopic(topic.name))
                } else {
                    Phase::TopicSelected(topic)
                }
            }
            Phase::TopicSelected(mut topic) => {
                topic.questions.shuffle(&mut self.rng);
                let count = choose_question_count(
                    topic.questions.len(),
                    &mut self.input,
                    &mut self.output,
                )?;
                Phase::QuestionCountChosen(Session::new(&topic.name, topic.questions, count))
            }
            Phase::QuestionCountChosen(session) => Phase::Presenting(session),
            Phase::Presenting(mut session) => {
                let is_correct = self.present(&session)?;
                session.record(is_correct);
                if session.is_finished() {
                    let mut results = ResultsState::new(
                        session.get_score(),
                        session.total(),
                        self.output.clone(),
                    );
                    results.on_begin();
                    results.on_end();
                    Phase::Complete(session)
                } else {
                    Phase::Presenting(session)
                }
            }
            finished @ Phase::Complete(_) | finished @ Phase::Aborted(_) => finished,
        };
        self.set_current_phase(next_phase);
        Ok(())
    }

    fn load_topics(&mut self) -> Phase {
        let sources = definition::discover_topics(&self.questions_dir);
        if sources.is_empty() {
            let directory = self.questions_dir.clone();
            self.output.say(&Message::NoTopics(directory));
            return Phase::Aborted(AbortReason::NoTopics);
        }

        let mut topics = Vec::with_capacity(sources.len());
        for (name, path) in sources {
            let questions = match definition::load_questions(&path) {
                Ok(Some(questions)) => questions,
                Ok(None) => {
                    self.output.say(&Message::SourceMissing(path));
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!("Could not load topic {}: {:#}", name, e);
                    let reason = format!("{:#}", e);
                    self.output.say(&Message::SourceUnreadable(path, reason));
                    Vec::new()
                }
            };
            topics.push(Topic::new(&name, questions));
        }

        let catalog = TopicCatalog::new(topics);
        if catalog.total_questions() == 0 {
            self.output.say(&Message::NoQuestions);
            return Phase::Aborted(AbortReason::NoQuestions);
        }
        Phase::TopicsLoaded(catalog)
    }

    fn present(&mut self, session: &Session) -> Result<bool> {
        let question = session
            .current_question()
            .cloned()
            .context("No question left to present")?;
        let mut state = QuestionState::new(
            question,
            session.current_number(),
            &mut self.rng,
            self.output.clone(),
        );
        state.on_begin();
        let prompt = Prompt::Answer(state.get_options().len());
        let choice = input::ask(&mut self.input, &mut self.output, prompt)?;
        let guess_result = state.guess(choice)?;
        state.on_end();
        Ok(guess_result.is_correct)
    }
}
