// src/config/model.rs

use serde::Deserialize;

use crate::types::ProcessKind;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// trials = 1000
/// max_order = 16
/// seed = 7
///
/// [[row]]
/// process = "remove"
/// x = 1
/// y = 2
/// ```
///
/// The `[config]` section is optional; every field has a default. Each
/// `[[row]]` describes one probability-table row: a process and its
/// (x, y) target pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default, rename = "row")]
    pub rows: Vec<RowConfig>,
}

/// `[config]` section: parameters shared by every row of the batch.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Trials per vertex count.
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Largest vertex count each row samples (rows cover 5..=max_order).
    #[serde(default = "default_max_order")]
    pub max_order: usize,

    /// Optional RNG seed threaded through the whole batch; random when
    /// omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_trials() -> usize {
    1000
}

fn default_max_order() -> usize {
    16
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            max_order: default_max_order(),
            seed: None,
        }
    }
}

/// `[[row]]` section: one probability-table row.
#[derive(Debug, Clone, Deserialize)]
pub struct RowConfig {
    /// `"remove"` or `"add"`.
    pub process: ProcessKind,

    /// Target number of initial vertices.
    pub x: usize,

    /// Target number of terminal vertices.
    pub y: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_section_defaults_apply() {
        let cfg: ConfigFile = toml::from_str(
            r#"
            [[row]]
            process = "add"
            x = 1
            y = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.config.trials, 1000);
        assert_eq!(cfg.config.max_order, 16);
        assert_eq!(cfg.config.seed, None);
        assert_eq!(cfg.rows.len(), 1);
        assert_eq!(cfg.rows[0].process, ProcessKind::Add);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg: ConfigFile = toml::from_str(
            r#"
            [config]
            trials = 50
            max_order = 8
            seed = 99

            [[row]]
            process = "remove"
            x = 2
            y = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.config.trials, 50);
        assert_eq!(cfg.config.max_order, 8);
        assert_eq!(cfg.config.seed, Some(99));
    }

    #[test]
    fn unknown_process_names_fail_to_parse() {
        let parsed: Result<ConfigFile, _> = toml::from_str(
            r#"
            [[row]]
            process = "grow"
            x = 1
            y = 1
            "#,
        );
        assert!(parsed.is_err());
    }
}
