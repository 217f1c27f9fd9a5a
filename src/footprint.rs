use tracing::{debug, instrument};

use crate::config::ModelConfig;
use crate::num::round_to;
use crate::practice::PracticeRecord;
use crate::types::CarbonFootprint;

pub type FootprintResult = CarbonFootprint;

/// Baseline footprint before any practice is applied.
pub fn baseline(cfg: &ModelConfig) -> FootprintResult {
    let total_emissions = round_to(cfg.baseline_emissions, 2);
    let sequestration = round_to(cfg.baseline_sequestration, 2);
    FootprintResult {
        total_emissions,
        sequestration,
        net_footprint: round_to(total_emissions - sequestration, 2).max(0.0),
        reduction_percentage: 0.0,
    }
}

/// Footprint with the default constants.
pub fn compute_footprint(practices: &[PracticeRecord]) -> FootprintResult {
    compute_footprint_with(&ModelConfig::default(), practices)
}

/// Aggregate practice impacts onto the baseline.
///
/// Only reductions (negative impacts) lower emissions; positive impacts are
/// ignored there. Sequestration is credited on the magnitude of every impact,
/// whatever its sign.
#[instrument(level = "debug", skip_all, fields(practices = practices.len()))]
pub fn compute_footprint_with(cfg: &ModelConfig, practices: &[PracticeRecord]) -> FootprintResult {
    let (emissions, sequestration) = practices.iter().fold(
        (cfg.baseline_emissions, cfg.baseline_sequestration),
        |(e, s), p| {
            (
                e + p.carbon_impact.min(0.0),
                s + (p.carbon_impact.abs() * cfg.sequestration_factor).max(0.0),
            )
        },
    );

    let total_emissions = round_to(emissions, 2);
    let sequestration = round_to(sequestration, 2);
    let net_footprint = round_to(total_emissions - sequestration, 2).max(0.0);
    let reduction_percentage = round_to(
        (cfg.baseline_emissions - total_emissions) / cfg.baseline_emissions * 100.0,
        1,
    );

    debug!(total_emissions, sequestration, net_footprint, reduction_percentage, "footprint computed");

    FootprintResult {
        total_emissions,
        sequestration,
        net_footprint,
        reduction_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::{CoverCrop, Fertilizer, Livestock, PracticeSelection, Rotation, Tillage};

    #[test]
    fn empty_input_is_baseline() {
        let fp = compute_footprint(&[]);
        assert_eq!(fp.total_emissions, 5200.0);
        assert_eq!(fp.sequestration, 1850.0);
        assert_eq!(fp.net_footprint, 3350.0);
        assert_eq!(fp.reduction_percentage, 0.0);
        assert_eq!(fp, baseline(&ModelConfig::default()));
    }

    #[test]
    fn single_no_till_record() {
        let fp = compute_footprint(&[PracticeRecord::new(-2.3, 15000.0, 0.18)]);
        assert_eq!(fp.total_emissions, 5197.7);
        assert_eq!(fp.sequestration, 1850.92);
        assert_eq!(fp.net_footprint, 3346.78);
        assert_eq!(fp.reduction_percentage, 0.0);
    }

    #[test]
    fn positive_impact_only_adds_sequestration() {
        let fp = compute_footprint(&[PracticeRecord::new(5.0, 0.0, 0.0)]);
        assert_eq!(fp.total_emissions, 5200.0);
        assert_eq!(fp.sequestration, 1852.0);
        assert_eq!(fp.reduction_percentage, 0.0);
    }

    #[test]
    fn net_footprint_clamps_at_zero() {
        let fp = compute_footprint(&[PracticeRecord::new(-5000.0, 0.0, 0.0)]);
        assert_eq!(fp.total_emissions, 200.0);
        assert_eq!(fp.sequestration, 3850.0);
        assert_eq!(fp.net_footprint, 0.0);
        assert_eq!(fp.reduction_percentage, 96.2);
    }

    #[test]
    fn default_selection() {
        // -1.2 - 1.1 - 1.2 - 1.4 = -4.9
        let fp = compute_footprint(&PracticeSelection::default().records());
        assert_eq!(fp.total_emissions, 5195.1);
        assert_eq!(fp.sequestration, 1851.96);
        assert_eq!(fp.net_footprint, 3343.14);
        assert_eq!(fp.reduction_percentage, 0.1);
    }

    #[test]
    fn rounded_emissions_feed_the_reduction() {
        // unrounded emissions sit just above 5197.4 and would give 0.0
        let selection = PracticeSelection {
            tillage: Tillage::Conventional,
            cover: CoverCrop::None,
            fertilizer: Fertilizer::Precision,
            rotation: Rotation::Diverse,
            livestock: Livestock::None,
        };
        let fp = compute_footprint(&selection.records());
        assert_eq!(fp.total_emissions, 5197.4);
        assert_eq!(fp.sequestration, 1851.04);
        assert_eq!(fp.net_footprint, 3346.36);
        assert_eq!(fp.reduction_percentage, 0.1);
    }

    #[test]
    fn custom_factor() {
        let cfg = ModelConfig {
            sequestration_factor: 0.5,
            ..ModelConfig::default()
        };
        let fp = compute_footprint_with(&cfg, &[PracticeRecord::new(-2.0, 0.0, 0.0)]);
        assert_eq!(fp.sequestration, 1851.0);
        assert_eq!(fp.net_footprint, 3347.0);
    }
}
