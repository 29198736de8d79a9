//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// One formatting argument as written in fixture JSON.
///
/// Serialized externally tagged: `{"int": -5}`, `{"str": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureArg {
    Int(i32),
    Long(i64),
    Uint(u32),
    Ulong(u64),
    /// A one-character string.
    Char(String),
    Str(Option<String>),
    Float(f32),
}

impl std::str::FromStr for FixtureArg {
    type Err = HarnessError;

    /// Parse `kind:value`, e.g. `int:-5`, `str:hello`, `char:x`, or a bare
    /// `null` for a null string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "null" {
            return Ok(Self::Str(None));
        }
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| HarnessError::InvalidInput(format!("expected kind:value, got '{s}'")))?;
        let bad = |e: &dyn std::fmt::Display| {
            HarnessError::InvalidInput(format!("bad {kind} value '{value}': {e}"))
        };
        Ok(match kind {
            "int" => Self::Int(value.parse().map_err(|e| bad(&e))?),
            "long" => Self::Long(value.parse().map_err(|e| bad(&e))?),
            "uint" => Self::Uint(value.parse().map_err(|e| bad(&e))?),
            "ulong" => Self::Ulong(value.parse().map_err(|e| bad(&e))?),
            "char" => Self::Char(value.to_string()),
            "str" => Self::Str(Some(value.to_string())),
            "float" => Self::Float(value.parse().map_err(|e| bad(&e))?),
            other => {
                return Err(HarnessError::InvalidInput(format!(
                    "unknown argument kind '{other}'"
                )));
            }
        })
    }
}

/// Inputs for one `printf`/`snprintf` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallInputs {
    pub format: String,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Destination size for `snprintf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Equivalent C format for the host parity probe, when the engine's
    /// format differs (e.g. `%lx` vs `%X`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_format: Option<String>,
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// `printf` or `snprintf`.
    pub function: String,
    /// Behavior reference (C11 section or engine rule).
    pub reference: String,
    pub inputs: CallInputs,
    /// Expected buffer contents, up to the terminator for `snprintf`.
    pub expected_output: String,
    /// Expected return value; defaults to the output length when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<usize>,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|source| HarnessError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load every `*.json` set in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> Result<Vec<(std::path::PathBuf, Self)>, HarnessError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        paths.sort();
        paths
            .into_iter()
            .map(|path| Self::from_file(&path).map(|set| (path, set)))
            .collect()
    }
}

/// Lowercase hex SHA-256 of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    use sha2::Digest;
    use std::fmt::Write;
    let digest = sha2::Sha256::digest(data);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}
