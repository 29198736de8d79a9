//! Fixture execution against the engine.

use miniprintf_core::Arg;

use crate::error::HarnessError;
use crate::fixtures::{CallInputs, FixtureArg};
use crate::host::{HostArg, host_snprintf};

/// Function names a fixture may target.
pub const SUPPORTED_FUNCTIONS: &[&str] = &["printf", "snprintf"];

/// Fill byte for `snprintf` destinations, to catch stray writes.
const CANARY: u8 = 0xA5;

/// Outcome of running one fixture call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Bytes the engine stored, decoded lossily.
    pub output: String,
    /// Value returned by the engine.
    pub count: usize,
    /// Returned count exceeds what was stored.
    pub truncated: bool,
    /// `snprintf` left a terminator after the stored bytes and nothing
    /// after it. Always true for `printf`.
    pub terminated: bool,
    /// Host libc output when the case asks for a parity probe.
    pub host_output: Option<String>,
}

/// Convert fixture arguments into engine arguments borrowing from `args`.
pub fn to_engine_args(args: &[FixtureArg]) -> Result<Vec<Arg<'_>>, HarnessError> {
    args.iter()
        .map(|arg| {
            Ok(match arg {
                FixtureArg::Int(v) => Arg::Int(*v),
                FixtureArg::Long(v) => Arg::Long(*v),
                FixtureArg::Uint(v) => Arg::UInt(*v),
                FixtureArg::Ulong(v) => Arg::ULong(*v),
                FixtureArg::Char(s) => match s.as_bytes() {
                    [c] => Arg::Char(*c),
                    _ => {
                        return Err(HarnessError::InvalidInput(format!(
                            "char argument must be one byte, got {s:?}"
                        )));
                    }
                },
                FixtureArg::Str(s) => Arg::Str(s.as_deref().map(str::as_bytes)),
                FixtureArg::Float(v) => Arg::Float(*v),
            })
        })
        .collect()
}

fn to_host_arg(arg: &FixtureArg) -> HostArg {
    match arg {
        FixtureArg::Int(v) => HostArg::Int(*v),
        FixtureArg::Long(v) => HostArg::Long(*v),
        FixtureArg::Uint(v) => HostArg::UInt(*v),
        FixtureArg::Ulong(v) => HostArg::ULong(*v),
        FixtureArg::Char(s) => HostArg::Int(s.bytes().next().map_or(0, i32::from)),
        FixtureArg::Str(s) => HostArg::Str(s.clone()),
        FixtureArg::Float(v) => HostArg::Double(f64::from(*v)),
    }
}

/// True when `buf` holds a NUL at `stored` and only canary bytes after it.
/// An empty buffer has nothing to terminate.
fn is_terminated(buf: &[u8], stored: usize) -> bool {
    match buf.get(stored..) {
        None | Some([]) => buf.is_empty(),
        Some([nul, rest @ ..]) => *nul == 0 && rest.iter().all(|&b| b == CANARY),
    }
}

/// Run one call through the engine.
pub fn execute_case(function: &str, inputs: &CallInputs) -> Result<Execution, HarnessError> {
    let args = to_engine_args(&inputs.args)?;
    let fmt = inputs.format.as_bytes();

    let (output, count, stored, terminated) = match function {
        "printf" => {
            let mut out = Vec::new();
            let count = miniprintf_core::printf(&mut out, fmt, &args);
            let stored = out.len();
            (out, count, stored, true)
        }
        "snprintf" => {
            let capacity = inputs.capacity.ok_or_else(|| {
                HarnessError::InvalidInput(String::from("snprintf case needs a capacity"))
            })?;
            let mut buf = vec![CANARY; capacity];
            let count = miniprintf_core::snprintf(&mut buf, fmt, &args);
            let stored = count.min(capacity.saturating_sub(1));
            let terminated = is_terminated(&buf, stored);
            buf.truncate(stored);
            (buf, count, stored, terminated)
        }
        other => return Err(HarnessError::UnsupportedFunction(other.to_string())),
    };

    let host_output = inputs.host_format.as_deref().and_then(|host_format| {
        if inputs.args.len() > 1 {
            return None;
        }
        let host_arg = inputs.args.first().map(to_host_arg);
        host_snprintf(host_format, host_arg.as_ref())
    });

    Ok(Execution {
        output: String::from_utf8_lossy(&output).into_owned(),
        count,
        truncated: count > stored,
        terminated,
        host_output,
    })
}
