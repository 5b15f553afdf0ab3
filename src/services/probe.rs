use crate::domain::models::{FileStatus, TargetFile};
use std::path::Path;

/// Probe a path and load its content in one shot.
///
/// A missing file is a normal outcome, not an error. A file that exists but
/// cannot be read propagates as an error and aborts the run.
pub fn load_target(root: &Path, rel: &str) -> anyhow::Result<TargetFile> {
    let path = root.join(rel);
    if !path.exists() {
        return Ok(TargetFile {
            path: rel.to_string(),
            exists: false,
            content: None,
        });
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(TargetFile {
        path: rel.to_string(),
        exists: true,
        content: Some(content),
    })
}

/// Existence status for an already-probed target.
pub fn file_status(target: &TargetFile) -> FileStatus {
    FileStatus {
        path: target.path.clone(),
        status: if target.exists { "exists" } else { "missing" }.to_string(),
    }
}

/// Stat-only existence probe; content is never read.
pub fn probe_exists(root: &Path, rel: &str) -> FileStatus {
    FileStatus {
        path: rel.to_string(),
        status: if root.join(rel).exists() {
            "exists"
        } else {
            "missing"
        }
        .to_string(),
    }
}
