//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! operations policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the operations policy.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance/policy.yaml")?;
/// assert!(loader.policy().leave.annual_allowance_days > 0);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { policy })
    }

    /// Creates a loader carrying the built-in default policy.
    pub fn with_defaults() -> Self {
        Self {
            policy: PolicyConfig::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_shipped_policy_file() {
        let loader = ConfigLoader::load("./config/attendance/policy.yaml").unwrap();
        assert_eq!(loader.policy().leave.annual_allowance_days, 20);
        assert_eq!(loader.policy().attendance.default_break, "01:00");
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let error = ConfigLoader::load("./config/attendance/missing.yaml").unwrap_err();
        assert!(matches!(error, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_defaults_match_shipped_policy() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.policy().leave.annual_allowance_days, 20);
    }
}
