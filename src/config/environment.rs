//! Deployment environment selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Deployment environment; picks the `{environment}.toml` layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Variable read by [`Environment::from_env`]
    pub const ENV_VAR: &'static str = "PAGER_APP_ENV";

    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Test,
        Environment::Staging,
        Environment::Production,
    ];

    /// Read `PAGER_APP_ENV`, falling back to `Development` when unset or invalid
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    /// Read `PAGER_APP_ENV`; unset means `Development`.
    ///
    /// # Errors
    /// `EnvVarError` when the variable holds an unknown name.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.trim().parse(),
            _ => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Short names accepted besides [`as_str`](Self::as_str)
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Environment::Development => &["dev"],
            Environment::Test => &[],
            Environment::Staging => &["stage"],
            Environment::Production => &["prod"],
        }
    }

    /// File layered over `default.toml` for this environment
    pub fn config_file_name(&self) -> String {
        format!("{}.toml", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == wanted || env.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Environment::as_str).collect();
                ConfigError::EnvVarError(format!(
                    "Invalid environment '{}'. Valid values are: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::tests::{ENV_MUTEX, EnvGuard};

    #[test]
    fn test_parses_names_and_aliases() {
        let cases = [
            ("development", Environment::Development),
            ("dev", Environment::Development),
            ("test", Environment::Test),
            ("stage", Environment::Staging),
            ("PROD", Environment::Production),
            ("Production", Environment::Production),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Environment>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_every_environment_round_trips() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_unknown_name_lists_valid_values() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError(_)));
        assert!(err.to_string().contains("'qa'"));
        assert!(err.to_string().contains("development, test, staging, production"));
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(Environment::Staging.config_file_name(), "staging.toml");
        assert_eq!(Environment::default().config_file_name(), "development.toml");
    }

    #[test]
    fn test_try_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::new();

        env.remove(Environment::ENV_VAR);
        assert_eq!(Environment::try_from_env().unwrap(), Environment::Development);

        env.set(Environment::ENV_VAR, " prod ");
        assert_eq!(Environment::try_from_env().unwrap(), Environment::Production);

        env.set(Environment::ENV_VAR, "qa");
        assert!(Environment::try_from_env().is_err());
        assert_eq!(Environment::from_env(), Environment::Development);
    }
}
