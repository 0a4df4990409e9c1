use std::env;
use std::time::Duration;

/// Environment variable overriding the replay tick interval, in milliseconds
pub const TICK_ENV: &str = "CITY_ROUTE_TICK_MS";

/// Configuration for replaying a step log in the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub tick_interval: Duration,
    pub color: bool,
    pub json: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
            color: true,
            json: false,
        }
    }
}

impl ReplayConfig {
    /// Defaults, overridden by `CITY_ROUTE_TICK_MS` and `NO_COLOR`.
    /// An unparsable tick value is ignored.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(TICK_ENV).ok(), env::var_os("NO_COLOR").is_some())
    }

    fn from_vars(tick_ms: Option<String>, no_color: bool) -> Self {
        let mut config = Self::default();

        if let Some(raw) = tick_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.tick_interval = Duration::from_millis(ms),
                Err(err) => log::warn!("ignoring {}={:?}: {}", TICK_ENV, raw, err),
            }
        }
        if no_color {
            config.color = false;
        }

        config
    }

    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_interval = Duration::from_millis(ms);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides() {
        let config = ReplayConfig::from_vars(Some("250".to_string()), true);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert!(!config.color);
    }

    #[test]
    fn test_bad_tick_keeps_default() {
        let config = ReplayConfig::from_vars(Some("fast".to_string()), false);
        assert_eq!(config, ReplayConfig::default());
    }
}
