use serde::Deserialize;
use std::fmt;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Integer(i) => write!(f, "{}", i),
            // Keeps the fraction so `1.0` and `1` stay distinct options.
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawQuestion {
    #[serde(default)]
    pub question: Option<Scalar>,
    #[serde(default)]
    pub answer: Option<Scalar>,
    #[serde(default)]
    pub wrong_answers: Option<Vec<Scalar>>,
    #[serde(default)]
    pub explanation: Option<Scalar>,
}

// Spreadsheet rows carry their wrong answers in a single `|` separated cell.
#[derive(Clone, Debug, Deserialize)]
pub struct CsvQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub wrong_answers: Option<String>,
    pub explanation: Option<String>,
}

impl From<CsvQuestion> for RawQuestion {
    fn from(row: CsvQuestion) -> Self {
        let wrong_answers = row.wrong_answers.map(|answers| {
            answers
                .split('|')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(|a| Scalar::Text(a.to_owned()))
                .collect()
        });
        RawQuestion {
            question: row.question.map(Scalar::Text),
            answer: row.answer.map(Scalar::Text),
            wrong_answers,
            explanation: row.explanation.map(Scalar::Text),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub wrong_answers: Vec<String>,
    pub explanation: Option<String>,
}

impl Question {
    #[cfg(test)]
    pub fn new(prompt: &str, answer: &str, wrong_answers: &[&str]) -> Self {
        Question {
            prompt: prompt.to_owned(),
            answer: answer.to_owned(),
            wrong_answers: wrong_answers.iter().map(|a| (*a).to_owned()).collect(),
            explanation: None,
        }
    }

    #[cfg(test)]
    pub fn with_explanation(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_owned());
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.prompt.trim().is_empty() && !self.answer.trim().is_empty()
    }

    /// All wrong answers followed by the correct one, in source order.
    pub fn options(&self) -> Vec<String> {
        let mut options = self.wrong_answers.clone();
        options.push(self.answer.clone());
        options
    }
}

fn non_empty(value: Option<Scalar>) -> Option<String> {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.trim().is_empty())
}

impl RawQuestion {
    /// Returns `None` for entries missing a prompt or a correct answer.
    pub fn validate(self) -> Option<Question> {
        let question = Question {
            prompt: non_empty(self.question)?,
            answer: non_empty(self.answer)?,
            wrong_answers: self
                .wrong_answers
                .unwrap_or_default()
                .iter()
                .map(|a| a.to_string())
                .collect(),
            explanation: non_empty(self.explanation),
        };
        Some(question).filter(Question::is_valid)
    }
}
