use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::differentiation::differentiator::DEFAULT_STEP;
use crate::math::integration::gausslegendretable::MAX_ORDER;
use crate::math::integration::integrator::QuadratureRule;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidValue(String),
}

/// 數值實驗的設定，可由 JSON 檔讀入；缺少的欄位使用預設值。
///
/// ```json
/// {
///     "differentiation_step": 0.05,
///     "subdivisions": [10, 100, 1000],
///     "rules": ["trapezoidal", "simpson", {"gauss_legendre": 3}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    differentiation_step: f64,
    subdivisions: Vec<usize>,
    rules: Vec<QuadratureRule>,
    sample_step: f64,
    legendre_max_order: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            differentiation_step: DEFAULT_STEP,
            subdivisions: vec![
                2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100,
                200, 300, 400, 500, 600, 700, 800, 900, 1000,
            ],
            rules: vec![
                QuadratureRule::Rectangular,
                QuadratureRule::Trapezoidal,
                QuadratureRule::Simpson,
                QuadratureRule::GaussLegendre(2),
                QuadratureRule::GaussLegendre(3),
                QuadratureRule::GaussLegendre(4),
                QuadratureRule::GaussLegendre(MAX_ORDER),
            ],
            sample_step: 0.01,
            legendre_max_order: 5,
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn differentiation_step(&self) -> f64 {
        self.differentiation_step
    }

    pub fn subdivisions(&self) -> &[usize] {
        &self.subdivisions
    }

    pub fn rules(&self) -> &[QuadratureRule] {
        &self.rules
    }

    pub fn sample_step(&self) -> f64 {
        self.sample_step
    }

    pub fn legendre_max_order(&self) -> u32 {
        self.legendre_max_order
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        log::info!("loaded configuration from {}", file_path);
        Ok(config)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_value(json_value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, step) in [
            ("differentiation_step", self.differentiation_step),
            ("sample_step", self.sample_step),
        ] {
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigurationError::InvalidValue(format!(
                    "{} must be positive, got {}",
                    name, step
                )));
            }
        }
        if self.subdivisions.is_empty() {
            return Err(ConfigurationError::InvalidValue(
                "subdivisions must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
