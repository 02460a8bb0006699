use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Verdict of a single host probe. Persisted as `OK` / `FAILED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reachability::Reachable => "OK",
            Reachability::Unreachable => "FAILED",
        }
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reachability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Reachability::Reachable),
            "FAILED" => Ok(Reachability::Unreachable),
            other => Err(DomainError::Store(format!(
                "unknown reachability value: {other}"
            ))),
        }
    }
}

/// Probe result for one host address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub address: String,
    pub verdict: Reachability,
}

impl ProbeOutcome {
    pub fn new(address: impl Into<String>, verdict: Reachability) -> Self {
        Self {
            address: address.into(),
            verdict,
        }
    }
}
