//! Report assembly and rendering.
//!
//! A [`RunReport`] aggregates the findings of one checker run across any
//! number of files. It renders either as plain text (one line per
//! finding, suitable for CI logs) or as JSON via serde.

use serde::Serialize;

use crate::checker::CallableCheck;
use crate::types::ViolationKind;

/// One finding: either a documentation-style violation or a data-quality
/// fault (`violation` is `None` for faults such as a malformed tag).
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub callable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationKind>,
    pub message: String,
}

/// Findings for one checked file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
}

/// The aggregated result of one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    /// Total number of callables checked.
    pub checked: usize,
    /// Total number of findings across all files.
    pub findings: usize,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport::default()
    }

    /// Record the checks of one file. Files with no findings are kept in
    /// the report (with an empty list) so the JSON output names every
    /// file that was looked at.
    pub fn add_file(&mut self, path: impl Into<String>, checks: &[CallableCheck]) {
        let mut findings = Vec::new();

        for check in checks {
            self.checked += 1;
            let callable = check.id.to_string();
            match &check.result {
                Ok(verdict) => {
                    for violation in verdict.violations() {
                        findings.push(Finding {
                            callable: callable.clone(),
                            violation: Some(violation.kind),
                            message: violation.message.clone(),
                        });
                    }
                }
                Err(err) => {
                    findings.push(Finding {
                        callable,
                        violation: None,
                        message: err.to_string(),
                    });
                }
            }
        }

        self.findings += findings.len();
        self.files.push(FileReport {
            path: path.into(),
            findings,
        });
    }

    pub fn has_findings(&self) -> bool {
        self.findings > 0
    }

    /// Render one line per finding, prefixed with the file path, followed
    /// by a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for file in &self.files {
            for finding in &file.findings {
                out.push_str(&file.path);
                out.push_str(": ");
                out.push_str(&finding.message);
                out.push('\n');
            }
        }
        out.push_str(&format!(
            "checked {} callable(s) in {} file(s): {} finding(s)\n",
            self.checked,
            self.files.len(),
            self.findings,
        ));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
