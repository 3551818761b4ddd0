//! Markdown templates for suite summaries and case documents.
//!
//! Both renderers are pure: they take the decoded node and return the full
//! document text. Blocks are emitted only for attributes that are present and
//! non-empty, always in the same order, each followed by a blank line.

use casetree_data::{CaseDef, SuiteDef};

use crate::config::Labels;
use crate::error::ExportError;

/// Render the `README.md` body for a suite.
///
/// Callers should only write the result when [`SuiteDef::has_summary`] holds;
/// otherwise it is just a heading.
pub fn render_suite_readme(title: &str, suite: &SuiteDef, labels: &Labels) -> String {
    let mut out = format!("# {title}\n\n");
    if let Some(description) = suite.description() {
        out.push_str(&format!("{description}\n\n"));
    }
    if let Some(preconditions) = suite.preconditions() {
        out.push_str(&format!("## {}\n\n{preconditions}\n", labels.preconditions));
    }
    out
}

/// Render the `case.mdx` body for a case.
///
/// # Errors
/// Returns a structural error when a custom field with a value has no title,
/// or a step lacks its position or action.
pub fn render_case(title: &str, case: &CaseDef, labels: &Labels) -> Result<String, ExportError> {
    let mut out = format!("# {title}\n\n");

    for (i, field) in case.custom_fields().iter().enumerate() {
        let Some(value) = field.value() else { continue };
        let name = field
            .title
            .as_deref()
            .ok_or_else(|| ExportError::structural(format!("custom field {} has no `title`", i + 1)))?;
        out.push_str(&format!("**{name}**: {value}\n\n"));
    }

    if let Some(priority) = case.priority() {
        out.push_str(&format!("**{}**: {priority}\n\n", labels.priority));
    }
    if let Some(severity) = case.severity() {
        out.push_str(&format!("**{}**: {severity}\n\n", labels.severity));
    }
    if let Some(description) = case.description() {
        out.push_str(&format!("## {}\n\n{description}\n\n", labels.description));
    }
    if let Some(preconditions) = case.preconditions() {
        out.push_str(&format!("## {}\n\n{preconditions}\n\n", labels.preconditions));
    }

    if !case.steps().is_empty() {
        out.push_str(&format!("## {}\n\n", labels.test_steps));
        for (i, step) in case.steps().iter().enumerate() {
            let position = step
                .position
                .as_ref()
                .ok_or_else(|| ExportError::structural(format!("step {} has no `position`", i + 1)))?;
            let action = step
                .action
                .as_deref()
                .ok_or_else(|| ExportError::structural(format!("step {position} has no `action`")))?;
            out.push_str(&format!("### {} {position}\n\n", labels.step));
            out.push_str(&format!("**{}**: {action}\n\n", labels.action));
            if let Some(expected) = step.expected_result() {
                out.push_str(&format!("**{}**:\n{expected}\n\n", labels.expected_result));
            }
            if let Some(data) = step.data() {
                out.push_str(&format!("**{}**: {data}\n\n", labels.data));
            }
        }
    }

    if let Some(postconditions) = case.postconditions() {
        out.push_str(&format!("## {}\n\n{postconditions}\n\n", labels.postconditions));
    }

    Ok(out)
}
