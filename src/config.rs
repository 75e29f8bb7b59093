use std::{env, fmt, str::FromStr};

use crate::error::{Error, Result};

const ENV_MAX_EXPANSIONS: &str = "SLIDER_MAX_EXPANSIONS";
const ENV_DUPLICATE_CHECK: &str = "SLIDER_DUPLICATE_CHECK";

/// How a search avoids re-enqueueing boards it has already seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// Reject a neighbor that equals any board on the expanding node's path
    /// back to the root. Costs O(depth) per neighbor.
    #[default]
    Ancestors,
    /// Keep a hashed set of expanded boards and skip any board already in it.
    ClosedSet,
}

impl FromStr for DuplicateCheck {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ancestors" => Ok(Self::Ancestors),
            "closed-set" | "closed_set" => Ok(Self::ClosedSet),
            other => Err(Error::InvalidConfiguration(format!(
                "Unknown duplicate check {other:?} (expected \"ancestors\" or \"closed-set\")"
            ))),
        }
    }
}

impl fmt::Display for DuplicateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestors => f.write_str("ancestors"),
            Self::ClosedSet => f.write_str("closed-set"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop with [`Error::BudgetExhausted`] after this many expansions,
    /// counted across both searches.
    pub max_expansions: Option<usize>,
    pub duplicate_check: DuplicateCheck,
}

impl SolverConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from `lookup`, which maps a variable name to
    /// its value. Unset and blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_MAX_EXPANSIONS) {
            let limit = raw.trim().parse::<usize>().map_err(|_| {
                Error::InvalidConfiguration(format!(
                    "{ENV_MAX_EXPANSIONS} must be a non-negative integer, got {raw:?}"
                ))
            })?;
            if limit == 0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{ENV_MAX_EXPANSIONS} must be at least 1"
                )));
            }
            config.max_expansions = Some(limit);
        }

        if let Some(raw) = value(ENV_DUPLICATE_CHECK) {
            config.duplicate_check = raw.parse()?;
        }

        Ok(config)
    }
}
