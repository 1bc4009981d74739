use crate::calendar::{MonthFilter, DEFAULT_DATE_FORMAT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runner settings, read from a JSON file. Every field is optional;
/// command-line flags override whatever the file sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    pub calendar:    Option<PathBuf>,
    pub staff:       Option<PathBuf>,
    pub output_dir:  PathBuf,
    /// `None` draws a fresh seed from OS entropy.
    pub seed:        Option<u64>,
    /// `YYYY-MM`
    pub month:       Option<String>,
    pub date_format: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            calendar:    None,
            staff:       None,
            output_dir:  PathBuf::from("."),
            seed:        Some(42),
            month:       None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.month_filter()?;
        Ok(config)
    }

    pub fn month_filter(&self) -> anyhow::Result<Option<MonthFilter>> {
        Ok(self.month.as_deref().map(str::parse::<MonthFilter>).transpose()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "staff": "staff.csv", "month": "2026-01" }}"#).unwrap();

        let config = RunnerConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.staff, Some(PathBuf::from("staff.csv")));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(
            config.month_filter().unwrap(),
            Some(MonthFilter { year: 2026, month: 1 })
        );
    }

    #[test]
    fn null_seed_means_entropy() {
        let config: RunnerConfig = serde_json::from_str(r#"{ "seed": null }"#).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn bad_month_fails_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "month": "Jan" }}"#).unwrap();
        assert!(RunnerConfig::load(file.path().to_str().unwrap()).is_err());
    }
}
