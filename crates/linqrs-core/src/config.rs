//! Query configuration that callers and the CLI can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How `join_with` matches outer elements against the inner sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinStrategy {
    /// Re-traverse the inner sequence once per outer element. O(outer × inner).
    #[default]
    NestedLoop,
    /// Index the inner sequence by key in one traversal, then probe.
    Hash,
}

impl FromStr for JoinStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested-loop" | "nested_loop" | "nested" => Ok(JoinStrategy::NestedLoop),
            "hash" => Ok(JoinStrategy::Hash),
            other => Err(Error::Config(format!("unknown join strategy '{}'", other))),
        }
    }
}

impl fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinStrategy::NestedLoop => write!(f, "nested-loop"),
            JoinStrategy::Hash => write!(f, "hash"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Strategy used by `join_with`.
    pub join_strategy: JoinStrategy,

    /// Pre-size materialized vectors when the source length is known.
    /// Performance only; never changes results.
    pub preallocate: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            join_strategy: JoinStrategy::NestedLoop,
            preallocate: true,
        }
    }
}

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LINQRS_JOIN_STRATEGY`: `nested-loop` or `hash`
    /// - `LINQRS_PREALLOCATE`: `true` or `false`
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`QueryConfig::from_env`], reading through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("LINQRS_JOIN_STRATEGY") {
            if let Ok(v) = s.parse::<JoinStrategy>() {
                cfg.join_strategy = v;
            }
        }

        if let Some(s) = lookup("LINQRS_PREALLOCATE") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.preallocate = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(doc: &str) -> Result<Self> {
        Ok(serde_json::from_str(doc)?)
    }

    /// Capacity to reserve for a materialized output of `known_len` elements.
    pub fn capacity_for(&self, known_len: Option<usize>) -> usize {
        if self.preallocate {
            known_len.unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let cfg = QueryConfig::default();
        assert_eq!(cfg.join_strategy, JoinStrategy::NestedLoop);
        assert!(cfg.preallocate);
    }

    #[test]
    fn env_overrides_defaults() {
        let env = vars(&[
            ("LINQRS_JOIN_STRATEGY", "hash"),
            ("LINQRS_PREALLOCATE", "false"),
        ]);
        let cfg = QueryConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(cfg.join_strategy, JoinStrategy::Hash);
        assert!(!cfg.preallocate);
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let env = vars(&[
            ("LINQRS_JOIN_STRATEGY", "merge"),
            ("LINQRS_PREALLOCATE", "maybe"),
        ]);
        let cfg = QueryConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(cfg, QueryConfig::default());
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("Hash".parse::<JoinStrategy>().unwrap(), JoinStrategy::Hash);
        assert_eq!(
            "nested-loop".parse::<JoinStrategy>().unwrap(),
            JoinStrategy::NestedLoop
        );
        assert!(matches!(
            "sort-merge".parse::<JoinStrategy>(),
            Err(Error::Config(_))
        ));
        assert_eq!(JoinStrategy::Hash.to_string(), "hash");
    }

    #[test]
    fn json_with_missing_fields_uses_defaults() {
        let cfg = QueryConfig::from_json(r#"{ "join_strategy": "hash" }"#).unwrap();
        assert_eq!(cfg.join_strategy, JoinStrategy::Hash);
        assert!(cfg.preallocate);

        assert!(QueryConfig::from_json("not json").is_err());
    }

    #[test]
    fn capacity_follows_preallocate() {
        let mut cfg = QueryConfig::default();
        assert_eq!(cfg.capacity_for(Some(8)), 8);
        assert_eq!(cfg.capacity_for(None), 0);
        cfg.preallocate = false;
        assert_eq!(cfg.capacity_for(Some(8)), 0);
    }
}
