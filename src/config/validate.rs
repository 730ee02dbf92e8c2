// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, SimdagError};
use crate::stats::MIN_PROB_ORDER;

/// Semantic validation of a parsed config, run before any trial executes.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_rows(cfg)?;
    validate_global_config(cfg)?;
    validate_rows(cfg)?;
    Ok(())
}

fn ensure_has_rows(cfg: &ConfigFile) -> Result<()> {
    if cfg.rows.is_empty() {
        return Err(SimdagError::ConfigError(
            "config must contain at least one [[row]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.config.trials == 0 {
        return Err(SimdagError::ConfigError(
            "[config].trials must be >= 1 (got 0)".to_string(),
        ));
    }
    if cfg.config.max_order < MIN_PROB_ORDER {
        return Err(SimdagError::ConfigError(format!(
            "[config].max_order must be >= {MIN_PROB_ORDER} (got {})",
            cfg.config.max_order
        )));
    }
    Ok(())
}

fn validate_rows(cfg: &ConfigFile) -> Result<()> {
    for (idx, row) in cfg.rows.iter().enumerate() {
        if row.x == 0 || row.y == 0 {
            return Err(SimdagError::ConfigError(format!(
                "row {idx}: targets must be positive (got x = {}, y = {})",
                row.x, row.y
            )));
        }
        if row.x.max(row.y) > MIN_PROB_ORDER {
            return Err(SimdagError::ConfigError(format!(
                "row {idx}: targets ({}, {}) exceed the smallest sampled vertex count {MIN_PROB_ORDER}",
                row.x, row.y
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{ConfigSection, RowConfig};
    use crate::types::ProcessKind;

    fn config_with_rows(rows: Vec<RowConfig>) -> ConfigFile {
        ConfigFile {
            config: ConfigSection::default(),
            rows,
        }
    }

    fn row(process: ProcessKind, x: usize, y: usize) -> RowConfig {
        RowConfig { process, x, y }
    }

    #[test]
    fn accepts_a_sane_batch() {
        let cfg = config_with_rows(vec![
            row(ProcessKind::Remove, 1, 2),
            row(ProcessKind::Add, 3, 4),
        ]);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn rejects_an_empty_batch() {
        let cfg = config_with_rows(vec![]);
        assert!(matches!(
            validate_config(&cfg),
            Err(SimdagError::ConfigError(_))
        ));
    }

    #[test]
    fn rejects_zero_targets() {
        let cfg = config_with_rows(vec![row(ProcessKind::Remove, 0, 1)]);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn rejects_targets_above_the_smallest_order() {
        let cfg = config_with_rows(vec![row(ProcessKind::Add, 1, 6)]);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn rejects_zero_trials_and_low_ceilings() {
        let mut cfg = config_with_rows(vec![row(ProcessKind::Remove, 1, 1)]);
        cfg.config.trials = 0;
        assert!(validate_config(&cfg).is_err());

        let mut cfg = config_with_rows(vec![row(ProcessKind::Remove, 1, 1)]);
        cfg.config.max_order = 4;
        assert!(validate_config(&cfg).is_err());
    }
}
