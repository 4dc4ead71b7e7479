use crate::constants::{defaults, env, log_formats};
use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub environment: String,
    pub log_level: String,
    pub log_format: String,
    /// Log registration events at info; debug otherwise
    pub log_registrations: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            environment: defaults::ENVIRONMENT.to_string(),
            log_level: defaults::LOG_LEVEL.to_string(),
            log_format: defaults::LOG_FORMAT.to_string(),
            log_registrations: true,
        }
    }
}

impl RegistryConfig {
    /// Layer `HANDLER_REGISTRY_*` environment variables over the defaults.
    ///
    /// The environment name comes from `HANDLER_REGISTRY_ENV`, falling back to
    /// `APP_ENV`, and nothing else may change it. Production environments
    /// default to the info level unless a level is set explicitly.
    pub fn from_env() -> RegistryResult<Self> {
        let environment = detect_environment();
        let defaults = Self::defaults_for(&environment);

        let settings = config::Config::builder()
            .set_override("environment", defaults.environment.clone())?
            .set_default("log_level", defaults.log_level.clone())?
            .set_default("log_format", defaults.log_format.clone())?
            .set_default("log_registrations", defaults.log_registrations)?
            .add_source(
                config::Environment::with_prefix(env::CONFIG_PREFIX)
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?;

        let config: RegistryConfig = settings.try_deserialize().map_err(|e| {
            RegistryError::Configuration(format!("Invalid registry configuration: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults for a named environment
    pub fn defaults_for(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            log_level: default_log_level(environment).to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> RegistryResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(RegistryError::Configuration(
                "log_level must not be empty".to_string(),
            ));
        }

        if !log_formats::ALL.contains(&self.log_format.as_str()) {
            return Err(RegistryError::Configuration(format!(
                "Invalid log_format '{}', expected one of {:?}",
                self.log_format,
                log_formats::ALL
            )));
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == log_formats::JSON
    }
}

/// Current environment from environment variables
pub fn detect_environment() -> String {
    std::env::var(env::ENVIRONMENT)
        .or_else(|_| std::env::var(env::FALLBACK_ENVIRONMENT))
        .unwrap_or_else(|_| defaults::ENVIRONMENT.to_string())
}

/// Log level based on environment
pub fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => defaults::PRODUCTION_LOG_LEVEL,
        _ => defaults::LOG_LEVEL,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::constants::env;
    use parking_lot::{const_mutex, Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = const_mutex(());

    /// Variables read while building configuration or logging filters
    const MANAGED_VARS: &[&str] = &[
        env::ENVIRONMENT,
        env::FALLBACK_ENVIRONMENT,
        env::RUST_LOG,
        "HANDLER_REGISTRY_ENVIRONMENT",
        "HANDLER_REGISTRY_LOG_LEVEL",
        "HANDLER_REGISTRY_LOG_FORMAT",
        "HANDLER_REGISTRY_LOG_REGISTRATIONS",
    ];

    /// Exclusive access to the process environment for one test.
    ///
    /// Starts with every managed variable unset and restores the previous
    /// values on drop.
    pub(crate) struct ScopedEnv {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        pub(crate) fn clean() -> Self {
            let lock = ENV_LOCK.lock();
            let saved = MANAGED_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect();
            for key in MANAGED_VARS {
                std::env::remove_var(key);
            }
            Self { saved, _lock: lock }
        }

        pub(crate) fn set(&self, key: &str, value: &str) -> &Self {
            debug_assert!(
                MANAGED_VARS.iter().any(|managed| *managed == key),
                "{key} is not restored on drop"
            );
            std::env::set_var(key, value);
            self
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
