use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub mod question;
pub mod topic;

pub use question::{CsvQuestion, Question, RawQuestion};
pub use topic::{Topic, TopicCatalog};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceFormat {
    Yaml,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<SourceFormat> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "csv" => Some(SourceFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct YamlQuestionFile {
    #[serde(default)]
    questions: Option<Vec<serde_yaml::Value>>,
}

/// Loads the valid questions of one data file, in source order.
///
/// `Ok(None)` means the file does not exist. Entries without a prompt or a
/// correct answer are dropped.
pub fn load_questions(source: &Path) -> Result<Option<Vec<Question>>> {
    if !source.exists() {
        return Ok(None);
    }
    let questions = match SourceFormat::from_path(source) {
        Some(SourceFormat::Csv) => parse_csv(source)?,
        _ => {
            let content = fs::read_to_string(source)
                .with_context(|| format!("could not read {}", source.display()))?;
            parse_yaml(&content).with_context(|| format!("could not parse {}", source.display()))?
        }
    };
    tracing::debug!(
        "Loaded {} question(s) from {}",
        questions.len(),
        source.display()
    );
    Ok(Some(questions))
}

pub fn parse_yaml(content: &str) -> Result<Vec<Question>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let file: Option<YamlQuestionFile> = serde_yaml::from_str(content)?;
    let entries = file.and_then(|f| f.questions).unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_yaml::from_value::<RawQuestion>(entry).ok())
        .filter_map(RawQuestion::validate)
        .collect())
}

fn parse_csv(source: &Path) -> Result<Vec<Question>> {
    let file = File::open(source).with_context(|| format!("could not open {}", source.display()))?;
    let mut csv_reader = csv::Reader::from_reader(file);
    let mut questions = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvQuestion = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!("Skipping row in {}: {}", source.display(), e);
                continue;
            }
        };
        if let Some(question) = RawQuestion::from(row).validate() {
            questions.push(question);
        }
    }
    Ok(questions)
}

/// Maps topic names to the data files found directly inside `directory`.
pub fn discover_topics(directory: &Path) -> BTreeMap<String, PathBuf> {
    let mut topics = BTreeMap::new();
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Could not list {}: {}", directory.display(), e);
            return topics;
        }
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && SourceFormat::from_path(p).is_some())
        .collect();
    paths.sort();
    for path in paths {
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_owned(),
            None => continue,
        };
        if let Some(existing) = topics.get(&stem) {
            tracing::warn!(
                "Ignoring {}, topic {} is already provided by {}",
                path.display(),
                stem,
                existing.display()
            );
            continue;
        }
        topics.insert(stem, path);
    }
    topics
}
