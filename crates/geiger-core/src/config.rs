//! Runtime parameters, overridable from a `key=value&...` query string.

use crate::constants::ANIMATE_THRESHOLD;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{key}`: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeigerParams {
    /// Ambient glitch/noise loops only fire while the counter is running.
    pub ambient_requires_running: bool,
    pub log_level: log::Level,
    /// Fixed RNG seed; entropy when `None`.
    pub seed: Option<u64>,
    /// Level change above which the readout plays the count-up animation.
    pub animate_threshold: u32,
}

impl Default for GeigerParams {
    fn default() -> Self {
        Self {
            ambient_requires_running: true,
            log_level: log::Level::Info,
            seed: None,
            animate_threshold: ANIMATE_THRESHOLD,
        }
    }
}

impl GeigerParams {
    /// Defaults overridden by `query` (leading `?` optional). Unknown keys are
    /// skipped. A malformed value is reported and that key keeps its default;
    /// the other pairs still apply.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut params = Self::default();
        let mut errors = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = params.apply(key, value) {
                errors.push(e);
            }
        }
        (params, errors)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "ambient" => {
                self.ambient_requires_running = match value {
                    "gated" => true,
                    "always" => false,
                    _ => return Err(invalid("ambient", value, "`gated` or `always`")),
                }
            }
            "log" => {
                self.log_level = value
                    .parse()
                    .map_err(|_| invalid("log", value, "a log level"))?;
            }
            "seed" => {
                self.seed = Some(
                    value
                        .parse()
                        .map_err(|_| invalid("seed", value, "an unsigned integer"))?,
                );
            }
            "threshold" => {
                self.animate_threshold = value
                    .parse()
                    .map_err(|_| invalid("threshold", value, "an unsigned integer"))?;
            }
            _ => log::debug!("[config] ignoring unknown key `{}`", key),
        }
        Ok(())
    }
}

fn invalid(key: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        expected,
    }
}
