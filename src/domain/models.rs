use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Function,
    Pattern,
}

/// One named expectation about a target file's content.
///
/// Every fragment in `expected` must appear verbatim in the file text for the
/// rule to pass. Comparison is case- and whitespace-sensitive; no
/// normalization occurs.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRule {
    pub label: String,
    pub kind: CheckKind,
    pub expected: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
}

/// A probed file: existence plus content, loaded at most once per run.
#[derive(Debug)]
pub struct TargetFile {
    pub path: String,
    pub exists: bool,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FileStatus {
    pub path: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

/// Full verification report. Field order is display order.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub overall: String,
    pub files: Vec<FileStatus>,
    pub implementation: Vec<CheckResult>,
    pub tests: Vec<CheckResult>,
    pub summary: Summary,
}
