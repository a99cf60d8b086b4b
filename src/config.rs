//! Runner configuration: environment defaults overridden by command-line flags.
//!
//! Environment variables:
//!
//! - `TOWER_SEED`: RNG seed for person counts (default: derived from the clock)
//! - `TOWER_TICK_MS`: tick interval in milliseconds (default: 10)
//! - `TOWER_LOG_PATH`: write logs to this file (default: no logging)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

pub const USAGE: &str = "\
Usage: tower-crane [--seed N] [--tick-ms N] [--log PATH]

Drop blocks onto the platform as the crane swings past.
Keys: space/enter drop, r restart, q quit.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TOWER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("TOWER_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup("TOWER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

/// Apply command-line flags on top of `base`.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String], base: RunConfig) -> Result<Option<RunConfig>> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--tick-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                config.tick_ms = match v.parse::<u64>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => return Err(anyhow!("invalid --tick-ms value: {}", v)),
                };
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_path = Some(PathBuf::from(v));
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lookup_reads_all_variables() {
        let config = RunConfig::from_lookup(|key| match key {
            "TOWER_SEED" => Some("42".into()),
            "TOWER_TICK_MS" => Some(" 16 ".into()),
            "TOWER_LOG_PATH" => Some("/tmp/tower.log".into()),
            _ => None,
        });
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/tower.log")));
    }

    #[test]
    fn lookup_falls_back_on_bad_values() {
        let config = RunConfig::from_lookup(|key| match key {
            "TOWER_SEED" => Some("7".into()),
            "TOWER_TICK_MS" => Some("0".into()),
            "TOWER_LOG_PATH" => Some("   ".into()),
            _ => None,
        });
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn flags_override_base() {
        let config = parse_args(
            &args(&["--seed", "9", "--tick-ms", "20", "--log", "out.log"]),
            RunConfig::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.tick_ms, 20);
        assert_eq!(config.log_path, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn help_returns_none() {
        assert!(parse_args(&args(&["--help"]), RunConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn bad_flags_are_errors() {
        let base = RunConfig::default();
        assert!(parse_args(&args(&["--seed"]), base.clone()).is_err());
        assert!(parse_args(&args(&["--seed", "abc"]), base.clone()).is_err());
        assert!(parse_args(&args(&["--tick-ms", "0"]), base.clone()).is_err());
        assert!(parse_args(&args(&["--fast"]), base).is_err());
    }
}
