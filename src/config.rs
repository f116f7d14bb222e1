// config.rs - Build configuration, loadable from JSON
use crate::error::{Error, Result};
use crate::traits::diagnostics::Severity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for acceleration-structure builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Maximum primitives per BVH leaf
    pub max_leaf_size: usize,
    /// SAH buckets per axis
    pub sah_buckets: usize,
    /// Geometries with more primitives than this fail to build
    pub max_primitives_per_geometry: usize,
    /// Severity of finalize progress diagnostics
    pub progress_severity: Severity,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_leaf_size: 4,
            sah_buckets: 12,
            max_primitives_per_geometry: 1 << 24,
            progress_severity: Severity::PROGRESS,
        }
    }
}

impl BuildConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_leaf_size == 0 {
            return Err(Error::InvalidConfig("max_leaf_size must be at least 1".into()));
        }
        if self.sah_buckets < 2 {
            return Err(Error::InvalidConfig("sah_buckets must be at least 2".into()));
        }
        if self.max_primitives_per_geometry == 0 {
            return Err(Error::InvalidConfig(
                "max_primitives_per_geometry must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = BuildConfig::from_json_str(r#"{ "max_leaf_size": 8 }"#).unwrap();
        assert_eq!(config.max_leaf_size, 8);
        assert_eq!(config.sah_buckets, 12);
        assert_eq!(config.progress_severity, Severity::PROGRESS);
    }

    #[test]
    fn rejects_zero_leaf_size() {
        let err = BuildConfig::from_json_str(r#"{ "max_leaf_size": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_single_bucket() {
        let err = BuildConfig::from_json_str(r#"{ "sah_buckets": 1 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BuildConfig::from_json_str("{ max_leaf_size: }").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn serializes_severity_as_integer() {
        let json = serde_json::to_value(BuildConfig::default()).unwrap();
        assert_eq!(json["progress_severity"], 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = BuildConfig::load("/nonexistent/ray-scene-config.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
