use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Constants driving the footprint, ROI and scoring models.
///
/// Defaults reproduce the dashboard's hard-coded values; a JSON file may
/// override any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Baseline annual emissions, tCO2e.
    pub baseline_emissions: f64,
    /// Baseline annual sequestration, tCO2e.
    pub baseline_sequestration: f64,
    /// Share of each practice's impact magnitude credited as sequestration.
    pub sequestration_factor: f64,
    /// Revenue increase at full adoption, USD.
    pub revenue_ceiling: f64,
    /// Synthetic adoption added per selected practice.
    pub adoption_step: f64,
    pub roi_bonus: f64,
    /// Payback (years) reported when nothing costs anything.
    pub default_payback_years: f64,
    pub scoring: ScoringMultipliers,
}

/// Target uplift applied to each regenerative sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringMultipliers {
    pub soil_health: f64,
    pub biodiversity: f64,
    pub water_conservation: f64,
    pub carbon_sequestration: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            baseline_emissions: 5200.0,
            baseline_sequestration: 1850.0,
            sequestration_factor: 0.4,
            revenue_ceiling: 60_000.0,
            adoption_step: 0.02,
            roi_bonus: 0.05,
            default_payback_years: 2.0,
            scoring: ScoringMultipliers::default(),
        }
    }
}

impl Default for ScoringMultipliers {
    fn default() -> Self {
        Self {
            soil_health: 1.15,
            biodiversity: 1.2,
            water_conservation: 1.1,
            carbon_sequestration: 1.18,
        }
    }
}

impl ModelConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let cfg: ModelConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded model config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        let all = [
            self.baseline_emissions,
            self.baseline_sequestration,
            self.sequestration_factor,
            self.revenue_ceiling,
            self.adoption_step,
            self.roi_bonus,
            self.default_payback_years,
            self.scoring.soil_health,
            self.scoring.biodiversity,
            self.scoring.water_conservation,
            self.scoring.carbon_sequestration,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(TrackerError::InvalidConfig("constants must be finite"));
        }
        if all.iter().any(|v| *v < 0.0) {
            return Err(TrackerError::InvalidConfig("constants must be non-negative"));
        }
        if self.baseline_emissions == 0.0 {
            return Err(TrackerError::InvalidConfig("baseline_emissions must be > 0"));
        }
        if self.sequestration_factor > 1.0 {
            return Err(TrackerError::InvalidConfig(
                "sequestration_factor must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
