use anyhow::{anyhow, Result};

use crate::definition::{Topic, TopicCatalog};
use crate::input::{self, QuizInput};
use crate::output::{Message, Prompt, QuizOutput};


pub fn choose_topic<I: QuizInput, O: QuizOutput>(
    catalog: &TopicCatalog,
    input: &mut I,
    output: &mut O,
) -> Result<Topic> {
    let menu = catalog.menu();
    let entries = menu
        .iter()
        .map(|topic| (topic.name.clone(), topic.questions.len()))
        .collect();
    output.say(&Message::TopicMenu(entries));

    let choice = input::ask(input, output, Prompt::Topic(menu.len()))?;
    menu.into_iter()
        .nth(choice - 1)
        .ok_or_else(|| anyhow!("topic {} is not on the menu", choice))
}

pub fn choose_question_count<I: QuizInput, O: QuizOutput>(
    available: usize,
    input: &mut I,
    output: &mut O,
) -> Result<usize> {
    input::ask(input, output, Prompt::QuestionCount(available))
}
