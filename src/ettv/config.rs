use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Default ETTV compliance limit in W/m^2.
pub const DEFAULT_LIMIT: f64 = 50.0;
/// Default climate label.
pub const DEFAULT_CLIMATE: &str = "Tropical";

/// Configuration of an ETTV calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EttvConfig {
    /// Compliance limit in W/m^2. The envelope passes when ETTV <= limit.
    pub limit: f64,
    /// Climate label. Only used for reporting.
    pub climate: String,
    /// Surfaces with a measured area at or below this value (m^2) are ignored.
    pub area_epsilon: f64,
}

impl EttvConfig {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            climate: DEFAULT_CLIMATE.to_string(),
            area_epsilon: f64::EPSILON,
        }
    }

    pub fn with_limit(limit: f64, climate: &str) -> Self {
        Self {
            limit,
            climate: climate.to_string(),
            ..Self::new()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.limit.is_finite() || self.limit < 0.0 {
            bail!("ETTV limit must be a finite value >= 0, got {}", self.limit);
        }
        if !self.area_epsilon.is_finite() || self.area_epsilon < 0.0 {
            bail!(
                "Area epsilon must be a finite value >= 0, got {}",
                self.area_epsilon
            );
        }
        Ok(())
    }
}

impl Default for EttvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EttvConfig::default();
        assert_eq!(cfg.limit, 50.0);
        assert_eq!(cfg.climate, "Tropical");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_limit() {
        assert!(EttvConfig::with_limit(-1.0, "Tropical").validate().is_err());
        assert!(EttvConfig::with_limit(f64::INFINITY, "Tropical").validate().is_err());
        let mut cfg = EttvConfig::new();
        cfg.area_epsilon = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg: EttvConfig = serde_json::from_str(r#"{"limit": 45.0}"#).unwrap();
        assert_eq!(cfg.limit, 45.0);
        assert_eq!(cfg.climate, DEFAULT_CLIMATE);
        assert_eq!(cfg.area_epsilon, f64::EPSILON);
    }
}
