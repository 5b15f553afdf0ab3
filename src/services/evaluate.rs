use crate::domain::models::{CheckResult, CheckRule};

/// Evaluate one rule against a block of file text.
///
/// Passes only when every expected fragment appears verbatim in the text.
pub fn evaluate(rule: &CheckRule, content: &str) -> CheckResult {
    let passed = rule.expected.iter().all(|f| content.contains(f));
    CheckResult {
        label: rule.label.clone(),
        passed,
    }
}
