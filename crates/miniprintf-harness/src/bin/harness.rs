//! CLI entrypoint for the miniprintf conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use miniprintf_harness::exec::execute_case;
use miniprintf_harness::fixtures::{CallInputs, FixtureArg};
use miniprintf_harness::float_reference::{curated_values, stepped_values, sweep};
use miniprintf_harness::report::FixtureDigest;
use miniprintf_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use miniprintf_harness::verify::VerificationSummary;
use miniprintf_harness::{ConformanceReport, FixtureSet, TestRunner};

/// Conformance tooling for miniprintf.
#[derive(Debug, Parser)]
#[command(name = "miniprintf-harness")]
#[command(about = "Conformance testing harness for miniprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long, default_value = "tests/conformance/fixtures")]
        fixture: PathBuf,
        /// Output report path (markdown; a JSON twin is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// JSONL structured log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Compare `%f` output against the double-precision reference.
    FloatSweep {
        /// Directive precision (0 selects the default significant figures).
        #[arg(long, default_value_t = 0)]
        precision: usize,
        /// Number of evenly spaced bit patterns to add to the curated set.
        #[arg(long, default_value_t = 10_000)]
        steps: usize,
        /// JSONL structured log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Format once and print the result.
    Render {
        /// Format string.
        #[arg(long)]
        format: String,
        /// Argument as kind:value (int, long, uint, ulong, char, str, float) or `null`.
        #[arg(long = "arg")]
        args: Vec<FixtureArg>,
        /// Use snprintf with this destination size.
        #[arg(long)]
        capacity: Option<usize>,
    },
}

fn run_id(prefix: &str) -> String {
    format!("{prefix}-{}", std::process::id())
}

fn open_log(path: Option<&PathBuf>, prefix: &str) -> std::io::Result<Option<LogEmitter>> {
    path.map(|p| LogEmitter::to_file(p, &run_id(prefix)))
        .transpose()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let sets = FixtureSet::load_dir(&fixture)?;
            if sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let mut runner = TestRunner::new("fixture-verify");
            if let Some(emitter) = open_log(log.as_ref(), "verify")? {
                runner = runner.with_emitter(emitter);
            }
            let mut results = Vec::new();
            let mut digests = Vec::new();
            for (path, set) in &sets {
                let bytes = std::fs::read(path)?;
                digests.push(FixtureDigest::new(path, &bytes, set));
                results.extend(runner.run(set));
            }
            if let Some(mut emitter) = runner.take_emitter() {
                emitter.flush()?;
            }

            let report_doc = ConformanceReport {
                title: String::from("miniprintf Conformance Report"),
                timestamp: miniprintf_harness::structured_log::now_utc(),
                fixtures: digests,
                summary: VerificationSummary::from_results(results),
            };
            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {}", failure.case_name);
                if let Some(diff) = &failure.diff {
                    eprintln!("{diff}");
                }
            }
            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }
            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::FloatSweep {
            precision,
            steps,
            log,
        } => {
            let mut values = curated_values();
            values.extend(stepped_values(steps));
            let report = sweep(&values, precision);
            eprintln!(
                "Float sweep: checked={}, out_of_envelope={}, mismatches={}",
                report.checked,
                report.out_of_envelope,
                report.mismatches.len()
            );

            let mut emitter = open_log(log.as_ref(), "float-sweep")?;
            for m in report.mismatches.iter().take(20) {
                eprintln!(
                    "  {:e} (0x{:08X}{}): engine={} reference={}",
                    m.value,
                    m.bits,
                    if m.in_envelope { "" } else { ", outside envelope" },
                    m.engine,
                    m.reference
                );
            }
            if let Some(emitter) = emitter.as_mut() {
                for m in &report.mismatches {
                    emitter.emit_entry(
                        LogEntry::new(String::new(), LogLevel::Warn, "float_mismatch")
                            .with_stream(StreamKind::Float)
                            .with_outcome(Outcome::Fail)
                            .with_details(serde_json::to_value(m)?),
                    )?;
                }
                let outcome = if report.all_matched() {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                emitter.emit_entry(
                    LogEntry::new(String::new(), LogLevel::Info, "float_sweep_end")
                        .with_stream(StreamKind::Float)
                        .with_outcome(outcome)
                        .with_details(serde_json::json!({
                            "checked": report.checked,
                            "out_of_envelope": report.out_of_envelope,
                            "mismatches": report.mismatches.len(),
                            "precision": precision,
                        })),
                )?;
                emitter.flush()?;
            }
            if !report.all_matched() {
                return Err("Float sweep found mismatches".into());
            }
        }
        Command::Render {
            format,
            args,
            capacity,
        } => {
            let function = if capacity.is_some() {
                "snprintf"
            } else {
                "printf"
            };
            let inputs = CallInputs {
                format,
                args,
                capacity,
                host_format: None,
            };
            let run = execute_case(function, &inputs)?;
            println!("{}", run.output);
            eprintln!(
                "count={} stored={} truncated={}",
                run.count,
                run.output.len(),
                run.truncated
            );
        }
    }
    Ok(())
}
