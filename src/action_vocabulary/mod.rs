use crate::error::Error;
use std::path::Path;

/// Labels used with the fake classifier when no label file is given.
pub const DEMO_LABELS: [&str; 12] = [
    "abseiling",
    "archery",
    "clapping",
    "dancing ballet",
    "high jump",
    "jumping jacks",
    "juggling balls",
    "playing guitar",
    "push up",
    "riding a bike",
    "skipping rope",
    "walking the dog",
];

/// Ordered class names. A class index is a position in this list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionVocabulary {
    labels: Vec<String>,
}

impl ActionVocabulary {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_LABELS.iter().map(|label| label.to_string()).collect())
    }

    /// Reads one label per line, skipping blank lines.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let vocabulary = Self::parse(&contents);

        if vocabulary.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "label file {} has no labels",
                path.display()
            )));
        }

        Ok(vocabulary)
    }

    pub fn parse(contents: &str) -> Self {
        let labels = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self::new(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, class_index: usize) -> Option<&str> {
        self.labels.get(class_index).map(String::as_str)
    }

    pub fn ensure_matches(&self, num_classes: usize) -> Result<(), Error> {
        if self.labels.len() != num_classes {
            return Err(Error::VocabularyMismatch {
                vocabulary: self.labels.len(),
                classes: num_classes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let vocabulary = ActionVocabulary::parse("run\n\n  walk \r\njump\n");

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.label(0), Some("run"));
        assert_eq!(vocabulary.label(1), Some("walk"));
        assert_eq!(vocabulary.label(2), Some("jump"));
        assert_eq!(vocabulary.label(3), None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abseiling").unwrap();
        writeln!(file, "air drumming").unwrap();

        let vocabulary = ActionVocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.label(1), Some("air drumming"));
    }

    #[test]
    fn test_from_file_empty_is_invalid() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let result = ActionVocabulary::from_file(file.path());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ActionVocabulary::from_file(Path::new("./does/not/exist.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_ensure_matches() {
        let vocabulary = ActionVocabulary::demo();

        assert!(vocabulary.ensure_matches(DEMO_LABELS.len()).is_ok());
        assert!(matches!(
            vocabulary.ensure_matches(600),
            Err(Error::VocabularyMismatch {
                vocabulary: 12,
                classes: 600
            })
        ));
    }
}
