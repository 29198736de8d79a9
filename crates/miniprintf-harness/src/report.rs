//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::fixtures::{FixtureSet, sha256_hex};
use crate::verify::VerificationSummary;

/// Identity of one fixture file that fed a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDigest {
    pub family: String,
    pub path: String,
    pub cases: usize,
    /// SHA-256 of the file bytes.
    pub sha256: String,
}

impl FixtureDigest {
    /// Digest a fixture set loaded from `path` with raw contents `bytes`.
    #[must_use]
    pub fn new(path: &std::path::Path, bytes: &[u8], set: &FixtureSet) -> Self {
        Self {
            family: set.family.clone(),
            path: path.display().to_string(),
            cases: set.cases.len(),
            sha256: sha256_hex(bytes),
        }
    }
}

/// A conformance report combining fixture identity and verification data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Fixture files verified.
    pub fixtures: Vec<FixtureDigest>,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        if !self.fixtures.is_empty() {
            out.push_str("| Fixture | Family | Cases | SHA-256 |\n");
            out.push_str("|---------|--------|-------|---------|\n");
            for f in &self.fixtures {
                out.push_str(&format!(
                    "| {} | {} | {} | `{}` |\n",
                    table_cell(&f.path),
                    table_cell(&f.family),
                    f.cases,
                    &f.sha256[..f.sha256.len().min(12)]
                ));
            }
            out.push('\n');
        }

        out.push_str("| Case | Function | Reference | Status |\n");
        out.push_str("|------|----------|-----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                table_cell(&r.case_name),
                table_cell(&r.function),
                table_cell(&r.reference),
                status
            ));
        }

        let failures: Vec<_> = self.summary.failures().collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or("(no diff)"));
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// Escape pipes so a field stays inside its Markdown table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
