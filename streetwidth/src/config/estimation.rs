use crate::model::WidthError;
use serde::{Deserialize, Serialize};

/// defines behaviors for a width-estimation run.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct EstimationConfig {
    /// maximum distance probed for nearby footprints; sub-segments with
    /// nothing nearer report this value as a capped sentinel. widths beyond
    /// twice this cap are clamped, a deliberate cost/accuracy trade-off for
    /// visualization-grade output.
    pub search_radius: f64,
    /// maximum sub-segment length used when sampling a centerline.
    pub max_sub_length: f64,
    /// bound on band corner miter offsets, as a multiple of the band width.
    pub offset_clamp_factor: f64,
    pub parallelize: bool,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            search_radius: 60.0,
            max_sub_length: 10.0,
            offset_clamp_factor: 10.0,
            parallelize: true,
        }
    }
}

impl EstimationConfig {
    pub fn validate(&self) -> Result<(), WidthError> {
        if self.search_radius <= 0.0 || !self.search_radius.is_finite() {
            return Err(WidthError::ConfigurationError(format!(
                "search_radius must be positive and finite, found {}",
                self.search_radius
            )));
        }
        if self.max_sub_length <= 0.0 || !self.max_sub_length.is_finite() {
            return Err(WidthError::ConfigurationError(format!(
                "max_sub_length must be positive and finite, found {}",
                self.max_sub_length
            )));
        }
        if self.offset_clamp_factor <= 0.0 || !self.offset_clamp_factor.is_finite() {
            return Err(WidthError::ConfigurationError(format!(
                "offset_clamp_factor must be positive and finite, found {}",
                self.offset_clamp_factor
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for EstimationConfig {
    type Error = WidthError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let config: EstimationConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                WidthError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                WidthError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                WidthError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                WidthError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(WidthError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_reference_behavior() {
        let config = EstimationConfig::default();
        assert_eq!(config.search_radius, 60.0);
        assert_eq!(config.max_sub_length, 10.0);
        assert_eq!(config.offset_clamp_factor, 10.0);
        assert!(config.parallelize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_decode_from_toml() {
        let toml_str = r#"
            search_radius = 45.0
            max_sub_length = 5.0
            offset_clamp_factor = 8.0
            parallelize = false
        "#;
        let config: EstimationConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search_radius, 45.0);
        assert_eq!(config.max_sub_length, 5.0);
        assert!(!config.parallelize);
    }

    #[test]
    fn test_unsupported_file_type() {
        let result = EstimationConfig::try_from(&String::from("params.yaml"));
        assert!(matches!(result, Err(WidthError::ConfigurationError(_))));
    }

    #[test]
    fn test_validate_rejects_nonpositive_radius() {
        let config = EstimationConfig {
            search_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WidthError::ConfigurationError(_))
        ));
    }
}
