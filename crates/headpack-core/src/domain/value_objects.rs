//! Domain value objects: SemanticVersion, OptionSet, BuildContext.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no I/O.
//! Grammar knowledge for extracting a version *from a descriptor* lives
//! in `descriptor.rs`; this file only defines the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SemanticVersion ──────────────────────────────────────────────────────────

/// A `MAJOR.MINOR.PATCH` numeric triple identifying a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The triple as a tuple, for callers that only want the numbers.
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = DomainError;

    /// Parse a strict `MAJOR.MINOR.PATCH` triple. Pre-release/build
    /// suffixes are rejected here; the descriptor grammar strips them
    /// before this parser ever sees the text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidVersion {
            text: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split('.');
        let mut next = |name: &str| -> Result<u64, DomainError> {
            parts
                .next()
                .ok_or_else(|| invalid(&format!("missing {name} component")))?
                .parse::<u64>()
                .map_err(|_| invalid(&format!("{name} is not a number")))
        };

        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;

        if parts.next().is_some() {
            return Err(invalid("more than three components"));
        }

        Ok(Self::new(major, minor, patch))
    }
}

// ── OptionSet ────────────────────────────────────────────────────────────────

/// User-supplied recipe options, immutable during one evaluation.
///
/// The only option surface is `test`: when enabled the generated
/// configuration carries the test-enable variable and the lifecycle runs
/// the build and test phases after configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    pub test: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self { test: false }
    }
}

impl OptionSet {
    pub const fn with_tests() -> Self {
        Self { test: true }
    }
}

// ── BuildContext ─────────────────────────────────────────────────────────────

/// The invoking tool's ambient settings (OS / compiler / architecture /
/// build type), treated as an opaque read-only input to configuration
/// generation and dependency resolution — never as process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    pub os: String,
    pub compiler: String,
    pub arch: String,
    pub build_type: BuildType,
    /// The C++ standard the toolchain is configured for, when known.
    pub cppstd: Option<u32>,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            os: "Linux".into(),
            compiler: "gcc".into(),
            arch: "x86_64".into(),
            build_type: BuildType::Release,
            cppstd: None,
        }
    }
}

impl fmt::Display for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.os, self.compiler, self.arch, self.build_type
        )
    }
}

/// Build type requested by the invoking tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" | "relwithdebinfo" | "minsizerel" => Ok(Self::Release),
            other => Err(DomainError::InvalidRecipe(format!(
                "unknown build type: {other}"
            ))),
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
