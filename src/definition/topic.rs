use super::Question;

pub const ALL_TOPICS_NAME: &str = "All";

#[derive(Clone, Debug)]
pub struct Topic {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Topic {
    pub fn new(name: &str, questions: Vec<Question>) -> Self {
        Topic {
            name: name.to_owned(),
            questions,
        }
    }
}

/// Topics in discovery order, plus the synthetic aggregate of all of them.
#[derive(Clone, Debug, Default)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        TopicCatalog { topics }
    }

    pub fn total_questions(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }

    pub fn all(&self) -> Topic {
        let questions = self
            .topics
            .iter()
            .flat_map(|t| t.questions.iter().cloned())
            .collect();
        Topic::new(ALL_TOPICS_NAME, questions)
    }

    /// Selectable topics as shown to the user, aggregate first.
    pub fn menu(&self) -> Vec<Topic> {
        let mut menu = Vec::with_capacity(self.topics.len() + 1);
        menu.push(self.all());
        menu.extend(self.topics.iter().cloned());
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::new(vec![
            Topic::new(
                "math",
                vec![
                    Question::new("2+2?", "4", &["3", "5"]),
                    Question::new("3*3?", "9", &["6"]),
                ],
            ),
            Topic::new("empty", vec![]),
            Topic::new(
                "geography",
                vec![Question::new("Capital of Peru?", "Lima", &["Quito"])],
            ),
        ])
    }

    #[test]
    fn aggregate_counts_every_topic() {
        let catalog = catalog();
        assert_eq!(catalog.all().questions.len(), 3);
        assert_eq!(catalog.total_questions(), 3);
    }

    #[test]
    fn aggregate_concatenates_in_discovery_order() {
        let prompts: Vec<String> = catalog()
            .all()
            .questions
            .into_iter()
            .map(|q| q.prompt)
            .collect();
        assert_eq!(prompts, vec!["2+2?", "3*3?", "Capital of Peru?"]);
    }

    #[test]
    fn menu_lists_aggregate_first() {
        let names: Vec<String> = catalog().menu().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec![ALL_TOPICS_NAME, "math", "empty", "geography"]);
    }
}
