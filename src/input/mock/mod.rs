use anyhow::Result;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::input::QuizInput;

#[derive(Clone, Default)]
pub struct ScriptedInput {
    lines: Arc<RwLock<VecDeque<String>>>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        let lines = lines.iter().map(|l| format!("{}\n", l)).collect();
        ScriptedInput {
            lines: Arc::new(RwLock::new(lines)),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.read().len()
    }
}

impl QuizInput for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.write().pop_front())
    }
}
