use crate::domain::models::{CheckResult, CheckRule, TargetFile};
use crate::services::evaluate::evaluate;

/// Run a registry of rules against one probed file.
///
/// When the file is absent the audit short-circuits to a single failure
/// entry; no content rule is evaluated. Otherwise every rule is evaluated
/// against the loaded text, in registry order.
pub fn audit_file(target: &TargetFile, rules: &[CheckRule]) -> Vec<CheckResult> {
    let Some(content) = &target.content else {
        return vec![CheckResult {
            label: format!("{} not found", target.path),
            passed: false,
        }];
    };
    rules.iter().map(|r| evaluate(r, content)).collect()
}
