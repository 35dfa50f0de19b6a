//! Item sources - where the chips come from.

use std::path::Path;

use thiserror::Error;

use crate::tag::Tag;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tag list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate tag id: {0}")]
    DuplicateId(String),
}

/// Supplies the items of a row, in a stable order.
pub trait TagSource {
    /// Source name, for logs.
    fn name(&self) -> &str;

    fn tags(&self) -> Vec<Tag>;
}

/// The built-in list of programming languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgrammingLanguages;

const LANGUAGES: &[(&str, &str)] = &[
    ("kotlin", "Kotlin"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("python", "Python"),
    ("go", "GO"),
    ("javascript", "Javascript"),
    ("dart", "Dart"),
    ("csharp", "C#"),
    ("swift", "Swift"),
    ("rust", "Rust"),
    ("typescript", "TypeScript"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("scala", "Scala"),
    ("r", "R"),
    ("perl", "Perl"),
    ("lua", "Lua"),
    ("haskell", "Haskell"),
    ("clojure", "Clojure"),
    ("elixir", "Elixir"),
];

impl TagSource for ProgrammingLanguages {
    fn name(&self) -> &str {
        "programming-languages"
    }

    fn tags(&self) -> Vec<Tag> {
        LANGUAGES
            .iter()
            .map(|&(id, name)| Tag::new(id, name))
            .collect()
    }
}

/// Tags loaded from a JSON array of `{ "id": ..., "display_name": ... }`.
#[derive(Debug, Clone)]
pub struct JsonTagSource {
    name: String,
    tags: Vec<Tag>,
}

impl JsonTagSource {
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, SourceError> {
        let tags: Vec<Tag> = serde_json::from_str(json)?;
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = tags.iter().find(|tag| !seen.insert(tag.id.as_str())) {
            return Err(SourceError::DuplicateId(dup.id.clone()));
        }
        Ok(Self {
            name: name.into(),
            tags,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json(path.display().to_string(), &json)?;
        tracing::debug!(path = %path.display(), count = source.tags.len(), "loaded tags");
        Ok(source)
    }
}

impl TagSource for JsonTagSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> Vec<Tag> {
        self.tags.clone()
    }
}
