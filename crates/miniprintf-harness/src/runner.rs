//! Test execution engine.

use crate::diff;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    emitter: Option<LogEmitter>,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            emitter: None,
        }
    }

    /// Log one JSONL entry per case, plus run start and end.
    #[must_use]
    pub fn with_emitter(mut self, emitter: LogEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Give back the emitter, e.g. to flush it.
    pub fn take_emitter(&mut self) -> Option<LogEmitter> {
        self.emitter.take()
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&mut self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.log(
            LogEntry::new(String::new(), LogLevel::Info, "run_start")
                .with_stream(StreamKind::Conformance)
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "cases": fixture_set.cases.len(),
                })),
        );

        let results: Vec<VerificationResult> =
            fixture_set.cases.iter().map(|case| self.run_case(case)).collect();

        let failed = results.iter().filter(|r| !r.passed).count();
        self.log(
            LogEntry::new(
                String::new(),
                if failed == 0 { LogLevel::Info } else { LogLevel::Warn },
                "run_end",
            )
            .with_stream(StreamKind::Conformance)
            .with_details(serde_json::json!({
                "family": fixture_set.family,
                "total": results.len(),
                "failed": failed,
            })),
        );
        results
    }

    fn run_case(&mut self, case: &FixtureCase) -> VerificationResult {
        let expected_count = case
            .expected_count
            .unwrap_or(case.expected_output.len());

        let (result, outcome) = match execute_case(&case.function, &case.inputs) {
            Ok(run) => {
                let mut notes = Vec::new();
                if let Some(host) = &run.host_output
                    && *host != run.output
                {
                    notes.push(format!(
                        "host parity mismatch: host={host:?}, impl={:?}",
                        run.output
                    ));
                }
                if !run.terminated {
                    notes.push(String::from("snprintf left the buffer unterminated"));
                }
                if run.count != expected_count {
                    notes.push(format!(
                        "count mismatch: expected={expected_count}, actual={}",
                        run.count
                    ));
                }

                let passed = run.output == case.expected_output
                    && run.count == expected_count
                    && run.terminated;
                let diff = if run.output != case.expected_output {
                    let mut d = diff::render_diff(&case.expected_output, &run.output);
                    for note in &notes {
                        d.push_str(note);
                        d.push('\n');
                    }
                    Some(d)
                } else if !notes.is_empty() {
                    Some(notes.join("\n"))
                } else {
                    None
                };

                let result = VerificationResult {
                    case_name: case.name.clone(),
                    function: case.function.clone(),
                    reference: case.reference.clone(),
                    passed,
                    expected: case.expected_output.clone(),
                    actual: run.output,
                    expected_count,
                    actual_count: Some(run.count),
                    diff,
                };
                (result, if passed { Outcome::Pass } else { Outcome::Fail })
            }
            Err(err) => {
                let actual = format!("error:{err}");
                let diff = Some(diff::render_diff(&case.expected_output, &actual));
                let result = VerificationResult {
                    case_name: case.name.clone(),
                    function: case.function.clone(),
                    reference: case.reference.clone(),
                    passed: false,
                    expected: case.expected_output.clone(),
                    actual,
                    expected_count,
                    actual_count: None,
                    diff,
                };
                (result, Outcome::Error)
            }
        };

        let level = match outcome {
            Outcome::Pass => LogLevel::Debug,
            Outcome::Fail => LogLevel::Warn,
            Outcome::Skip | Outcome::Error => LogLevel::Error,
        };
        let mut entry = LogEntry::new(String::new(), level, "case_result")
            .with_stream(StreamKind::Conformance)
            .with_case(&case.function, &case.name)
            .with_outcome(outcome);
        if let Some(count) = result.actual_count {
            entry = entry.with_byte_count(count);
        }
        if let Some(diff) = &result.diff {
            entry = entry.with_details(serde_json::json!({ "diff": diff }));
        }
        self.log(entry);
        result
    }

    fn log(&mut self, entry: LogEntry) {
        if let Some(emitter) = self.emitter.as_mut()
            && let Err(err) = emitter.emit_entry(entry)
        {
            eprintln!("structured log write failed: {err}");
        }
    }
}
