//! Service configuration loaded from an optional TOML file.
//!
//! ```toml
//! default_difficulty = "easy"
//! max_sessions = 5000
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Tier;

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
  /// Tier used when a client starts a session or asks for a question without one.
  pub default_difficulty: Tier,
  /// Upper bound on live sessions; the least recently used is dropped when exceeded.
  pub max_sessions: usize,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      default_difficulty: Tier::default(),
      max_sessions: DEFAULT_MAX_SESSIONS,
    }
  }
}

impl ServiceConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    let mut cfg: ServiceConfig = toml::from_str(s)?;
    if cfg.max_sessions == 0 {
      cfg.max_sessions = 1;
    }
    Ok(cfg)
  }
}

/// Load from ZAHLEN_CONFIG_PATH. Missing variable, IO or parse errors fall back to defaults.
pub fn load_config_from_env() -> ServiceConfig {
  let Ok(path) = std::env::var("ZAHLEN_CONFIG_PATH") else {
    return ServiceConfig::default();
  };
  match std::fs::read_to_string(&path) {
    Ok(s) => match ServiceConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "zahlen_backend", %path, difficulty = %cfg.default_difficulty, max_sessions = cfg.max_sessions, "Loaded service config (TOML)");
        cfg
      }
      Err(e) => {
        error!(target: "zahlen_backend", %path, error = %e, "Failed to parse TOML config; using defaults");
        ServiceConfig::default()
      }
    },
    Err(e) => {
      error!(target: "zahlen_backend", %path, error = %e, "Failed to read TOML config file; using defaults");
      ServiceConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn empty_file_gives_defaults() {
    assert_eq!(ServiceConfig::from_toml_str("").unwrap(), ServiceConfig::default());
  }

  #[test]
  fn reads_fields() {
    let cfg = ServiceConfig::from_toml_str("default_difficulty = \"hard\"\nmax_sessions = 3\n").unwrap();
    assert_eq!(cfg, ServiceConfig { default_difficulty: Tier::Hard, max_sessions: 3 });
  }

  #[test]
  fn difficulty_name_is_case_insensitive() {
    let cfg = ServiceConfig::from_toml_str("default_difficulty = \"Hard\"").unwrap();
    assert_eq!(cfg.default_difficulty, Tier::Hard);
  }

  #[test]
  fn zero_capacity_is_clamped() {
    let cfg = ServiceConfig::from_toml_str("max_sessions = 0").unwrap();
    assert_eq!(cfg.max_sessions, 1);
  }

  #[test]
  fn unknown_difficulty_is_a_parse_error() {
    assert!(ServiceConfig::from_toml_str("default_difficulty = \"extreme\"").is_err());
  }
}
