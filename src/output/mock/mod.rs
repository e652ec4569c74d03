use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, Prompt, QuizOutput};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Prompt(Prompt),
}

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the recorded messages, leaving prompts in place.
    pub fn flush(&self) -> Vec<Message> {
        let mut entries = self.entries.write();
        let mut messages = Vec::new();
        entries.retain(|entry| match entry {
            Entry::Text(message) => {
                messages.push(message.clone());
                false
            }
            Entry::Prompt(_) => true,
        });
        messages
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.read().clone()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| matches!(entry, Entry::Text(m) if m == message))
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Prompt(prompt) => Some(*prompt),
                Entry::Text(_) => None,
            })
            .collect()
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&mut self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<()> {
        self.entries.write().push(Entry::Prompt(*prompt));
        Ok(())
    }
}
