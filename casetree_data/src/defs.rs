use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of an exported test-management document.
///
/// Every attribute other than the containers themselves is optional at decode
/// time; consumers decide which ones are required and check presence where
/// they read them.
///
/// ```
/// use casetree_data::TestDocument;
///
/// let doc: TestDocument = serde_json::from_str(
///     r#"{"suites":[{"title":"Login","cases":[{"title":"Valid login"}]}]}"#,
/// )
/// .unwrap();
/// let suite = &doc.suites()[0];
/// assert_eq!(suite.title.as_deref(), Some("Login"));
/// assert_eq!(suite.cases().len(), 1);
/// assert!(suite.suites().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TestDocument {
    #[serde(default)]
    pub suites: Option<Vec<SuiteDef>>,
}

impl TestDocument {
    /// Top-level suites in document order.
    pub fn suites(&self) -> &[SuiteDef] {
        self.suites.as_deref().unwrap_or_default()
    }
}

/// A named grouping of cases and nested suites.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SuiteDef {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preconditions: Option<String>,
    #[serde(default)]
    pub cases: Option<Vec<CaseDef>>,
    #[serde(default)]
    pub suites: Option<Vec<SuiteDef>>,
}

impl SuiteDef {
    pub fn cases(&self) -> &[CaseDef] {
        self.cases.as_deref().unwrap_or_default()
    }

    pub fn suites(&self) -> &[SuiteDef] {
        self.suites.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn preconditions(&self) -> Option<&str> {
        non_empty(&self.preconditions)
    }

    /// True when the suite carries text worth a summary document.
    pub fn has_summary(&self) -> bool {
        self.description().is_some() || self.preconditions().is_some()
    }
}

/// A single test case.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaseDef {
    pub title: Option<String>,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomFieldDef>>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preconditions: Option<String>,
    #[serde(default)]
    pub postconditions: Option<String>,
    #[serde(default)]
    pub steps: Option<Vec<StepDef>>,
}

/// Priority value exporters write when none was chosen.
pub const UNDEFINED_PRIORITY: &str = "undefined";

impl CaseDef {
    pub fn custom_fields(&self) -> &[CustomFieldDef] {
        self.custom_fields.as_deref().unwrap_or_default()
    }

    pub fn steps(&self) -> &[StepDef] {
        self.steps.as_deref().unwrap_or_default()
    }

    /// Priority, with the exporter's "undefined" placeholder treated as absent.
    pub fn priority(&self) -> Option<&str> {
        non_empty(&self.priority).filter(|p| *p != UNDEFINED_PRIORITY)
    }

    pub fn severity(&self) -> Option<&str> {
        non_empty(&self.severity)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn preconditions(&self) -> Option<&str> {
        non_empty(&self.preconditions)
    }

    pub fn postconditions(&self) -> Option<&str> {
        non_empty(&self.postconditions)
    }
}

/// User-defined metadata attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomFieldDef {
    pub title: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl CustomFieldDef {
    pub fn value(&self) -> Option<&str> {
        non_empty(&self.value)
    }
}

/// One action and its expected outcome.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StepDef {
    pub position: Option<StepPosition>,
    pub action: Option<String>,
    #[serde(default)]
    pub expected_result: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl StepDef {
    pub fn expected_result(&self) -> Option<&str> {
        non_empty(&self.expected_result)
    }

    pub fn data(&self) -> Option<&str> {
        non_empty(&self.data)
    }
}

/// Caller-supplied step label. Rendered exactly as given, never renumbered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StepPosition {
    Number(i64),
    Float(f64),
    Label(String),
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPosition::Number(n) => write!(f, "{n}"),
            // Whole floats keep their decimal point, as the exporter wrote them.
            StepPosition::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            StepPosition::Float(n) => write!(f, "{n}"),
            StepPosition::Label(s) => f.write_str(s),
        }
    }
}

/// Empty strings count as absent, matching how exporters leave unset fields.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_priority_is_absent() {
        let case = CaseDef {
            priority: Some("undefined".into()),
            ..CaseDef::default()
        };
        assert_eq!(case.priority(), None);

        let case = CaseDef {
            priority: Some("high".into()),
            ..CaseDef::default()
        };
        assert_eq!(case.priority(), Some("high"));
    }

    #[test]
    fn empty_strings_are_absent() {
        let suite = SuiteDef {
            title: Some("S".into()),
            description: Some(String::new()),
            preconditions: None,
            ..SuiteDef::default()
        };
        assert!(!suite.has_summary());
    }

    #[test]
    fn whitespace_text_is_kept() {
        let suite = SuiteDef {
            preconditions: Some(" ".into()),
            ..SuiteDef::default()
        };
        assert!(suite.has_summary());
    }

    #[test]
    fn step_position_accepts_numbers_and_labels() {
        let steps: Vec<StepDef> =
            serde_json::from_str(r#"[{"position":3,"action":"a"},{"position":"2b","action":"b"}]"#).unwrap();
        assert_eq!(steps[0].position.as_ref().unwrap().to_string(), "3");
        assert_eq!(steps[1].position.as_ref().unwrap().to_string(), "2b");
    }

    #[test]
    fn step_position_accepts_floats() {
        let steps: Vec<StepDef> =
            serde_json::from_str(r#"[{"position":1.0,"action":"a"},{"position":2.5,"action":"b"}]"#).unwrap();
        assert_eq!(steps[0].position, Some(StepPosition::Float(1.0)));
        assert_eq!(steps[0].position.as_ref().unwrap().to_string(), "1.0");
        assert_eq!(steps[1].position.as_ref().unwrap().to_string(), "2.5");
    }

    #[test]
    fn null_containers_decode_as_empty() {
        let suite: SuiteDef = serde_json::from_str(r#"{"title":"S","cases":null,"suites":null}"#).unwrap();
        assert!(suite.cases().is_empty());
        assert!(suite.suites().is_empty());
    }

    #[test]
    fn missing_suites_key_decodes_as_empty() {
        let doc: TestDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.suites().is_empty());
    }
}
