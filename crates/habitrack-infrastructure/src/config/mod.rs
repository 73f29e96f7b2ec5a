use anyhow::Context;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_DB_PATH: &str = "HABITRACK_DB_PATH";
pub const ENV_LOG_DIR: &str = "HABITRACK_LOG_DIR";
pub const ENV_SESSION_DAYS: &str = "HABITRACK_SESSION_DAYS";
pub const ENV_COMPLETION_RETRIES: &str = "HABITRACK_COMPLETION_RETRIES";

const APP_DIR_NAME: &str = "habitrack";
const MAX_SESSION_DAYS: i64 = 3650;

/// Runtime settings of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitrackConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// Lifetime of a login session
    pub session_days: i64,
    /// Attempts of a completion whose streak was changed concurrently
    pub completion_retries: u32,
    pub db_max_connections: u32,
}

impl Default for HabitrackConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME);

        Self {
            db_path: data_dir.join("habitrack.db"),
            log_dir: data_dir.join("logs"),
            session_days: 7,
            completion_retries: 3,
            db_max_connections: 5,
        }
    }
}

impl HabitrackConfig {
    /// Defaults overridden by `HABITRACK_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path.trim());
        }
        if let Some(dir) = value(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir.trim());
        }
        if let Some(days) = value(ENV_SESSION_DAYS) {
            config.session_days = parse_number(ENV_SESSION_DAYS, &days)?;
        }
        if let Some(retries) = value(ENV_COMPLETION_RETRIES) {
            config.completion_retries = parse_number(ENV_COMPLETION_RETRIES, &retries)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_SESSION_DAYS).contains(&self.session_days) {
            anyhow::bail!(
                "{} must be between 1 and {} days (got {})",
                ENV_SESSION_DAYS,
                MAX_SESSION_DAYS,
                self.session_days
            );
        }
        if self.completion_retries < 1 {
            anyhow::bail!("{} must be at least 1", ENV_COMPLETION_RETRIES);
        }
        if self.db_max_connections < 1 {
            anyhow::bail!("Database connection count must be at least 1");
        }
        Ok(())
    }

    pub fn db_path_str(&self) -> anyhow::Result<&str> {
        self.db_path
            .to_str()
            .with_context(|| format!("Database path is not valid UTF-8: {:?}", self.db_path))
    }
}

fn parse_number<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} must be a number (got '{}')", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HabitrackConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.session_days, 7);
        assert_eq!(config.completion_retries, 3);
        assert!(config.db_path.ends_with("habitrack/habitrack.db"));
        assert!(config.log_dir.ends_with("habitrack/logs"));
    }

    #[test]
    fn test_env_overrides() {
        let config = HabitrackConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/h/test.db"),
            (ENV_LOG_DIR, "/tmp/h/logs"),
            (ENV_SESSION_DAYS, " 30 "),
            (ENV_COMPLETION_RETRIES, "5"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/h/test.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/h/logs"));
        assert_eq!(config.session_days, 30);
        assert_eq!(config.completion_retries, 5);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = HabitrackConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "  ")])).unwrap();
        assert_eq!(config.session_days, 7);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(HabitrackConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "week")])).is_err());
        assert!(HabitrackConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "0")])).is_err());
        assert!(
            HabitrackConfig::from_lookup(lookup_from(&[(ENV_COMPLETION_RETRIES, "0")])).is_err()
        );
    }

    #[test]
    fn test_session_days_upper_bound() {
        let huge = HabitrackConfig::from_lookup(lookup_from(&[(
            ENV_SESSION_DAYS,
            "200000000000000",
        )]));
        assert!(huge.is_err());

        let config =
            HabitrackConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "3650")])).unwrap();
        assert_eq!(config.session_days, 3650);

        let direct = HabitrackConfig {
            session_days: 3651,
            ..HabitrackConfig::default()
        };
        assert!(direct.validate().is_err());
    }
}
