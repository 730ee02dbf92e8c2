// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Which edge-mutation process to run.
///
/// - `Remove`: start from the complete forward-edge DAG and delete edges,
///   keeping initial/terminal counts within upper bounds.
/// - `Add`: start from the empty graph and insert edges, keeping the counts
///   above lower bounds, stopping early on an exact target hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    Remove,
    Add,
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessKind::Remove => write!(f, "remove"),
            ProcessKind::Add => write!(f, "add"),
        }
    }
}

impl FromStr for ProcessKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove" => Ok(ProcessKind::Remove),
            "add" => Ok(ProcessKind::Add),
            other => Err(format!(
                "invalid process: {other} (expected \"remove\" or \"add\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_kind_parses_case_insensitively() {
        assert_eq!("remove".parse::<ProcessKind>(), Ok(ProcessKind::Remove));
        assert_eq!(" Add ".parse::<ProcessKind>(), Ok(ProcessKind::Add));
        assert!("grow".parse::<ProcessKind>().is_err());
    }
}
