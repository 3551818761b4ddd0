//! Run configuration.
//!
//! The binary always runs with [`ExportConfig::default`]; the fields exist so
//! the library can be pointed at other locations (tests, embedding tools).

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "test-cases.json";
pub const DEFAULT_OUTPUT_ROOT: &str = "test-cases";
/// Suites nested deeper than this are rejected as malformed.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Where to read from, where to write to, and how documents are labelled.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub labels: Labels,
    pub max_depth: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            labels: Labels::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExportConfig {
    pub fn new(input: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Heading and label text used by the document templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub preconditions: String,
    pub priority: String,
    pub severity: String,
    pub description: String,
    pub test_steps: String,
    /// Prefix of each step heading, followed by a space and the position.
    pub step: String,
    pub action: String,
    pub expected_result: String,
    pub data: String,
    pub postconditions: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

impl Labels {
    pub fn english() -> Self {
        Self {
            preconditions: "Preconditions".into(),
            priority: "Priority".into(),
            severity: "Severity".into(),
            description: "Description".into(),
            test_steps: "Test Steps".into(),
            step: "Step".into(),
            action: "Action".into(),
            expected_result: "Expected Result".into(),
            data: "Data".into(),
            postconditions: "Postconditions".into(),
        }
    }

    pub fn japanese() -> Self {
        Self {
            preconditions: "前提条件".into(),
            priority: "優先度".into(),
            severity: "重要度".into(),
            description: "説明".into(),
            test_steps: "テストステップ".into(),
            step: "ステップ".into(),
            action: "操作".into(),
            expected_result: "期待結果".into(),
            data: "データ".into(),
            postconditions: "事後条件".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_locations() {
        let config = ExportConfig::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.labels, Labels::english());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn with_labels_keeps_paths() {
        let config = ExportConfig::new("a.json", "out").with_labels(Labels::japanese());
        assert_eq!(config.output_root, PathBuf::from("out"));
        assert_eq!(config.labels.test_steps, "テストステップ");
    }
}
