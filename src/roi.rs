use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::ModelConfig;
use crate::num::round_to;
use crate::practice::PracticeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Average practice ROI plus the flat bonus, 2 dp.
    pub roi: f64,
    /// Years, 1 dp; never below 1 when anything costs money.
    pub payback_period: f64,
    /// USD per year, whole dollars.
    pub potential_increase: f64,
}

pub fn compute_roi(practices: &[PracticeRecord]) -> RoiResult {
    compute_roi_with(&ModelConfig::default(), practices)
}

#[instrument(level = "debug", skip_all, fields(practices = practices.len()))]
pub fn compute_roi_with(cfg: &ModelConfig, practices: &[PracticeRecord]) -> RoiResult {
    let total_cost: f64 = practices.iter().map(|p| p.cost).sum();
    let average_roi = if practices.is_empty() {
        0.0
    } else {
        practices.iter().map(|p| p.roi).sum::<f64>() / practices.len() as f64
    };

    let adoption = (average_roi + practices.len() as f64 * cfg.adoption_step).clamp(0.0, 1.0);
    let potential_increase = round_to(cfg.revenue_ceiling * adoption, 0);
    let roi = round_to((average_roi + cfg.roi_bonus) * 100.0, 0) / 100.0;
    let payback_period = if total_cost > 0.0 {
        round_to(total_cost / potential_increase.max(1.0), 1).max(1.0)
    } else {
        cfg.default_payback_years
    };

    debug!(total_cost, average_roi, roi, potential_increase, payback_period, "roi computed");

    RoiResult {
        roi,
        payback_period,
        potential_increase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::PracticeSelection;

    #[test]
    fn empty_input_defaults() {
        let r = compute_roi(&[]);
        assert_eq!(r.roi, 0.05);
        assert_eq!(r.potential_increase, 0.0);
        assert_eq!(r.payback_period, 2.0);
    }

    #[test]
    fn two_records() {
        let r = compute_roi(&[
            PracticeRecord::new(-2.3, 15000.0, 0.18),
            PracticeRecord::new(-1.1, 5000.0, 0.20),
        ]);
        assert_eq!(r.roi, 0.24);
        assert_eq!(r.potential_increase, 13800.0);
        assert_eq!(r.payback_period, 1.4);
    }

    #[test]
    fn payback_floor_is_one_year() {
        let r = compute_roi(&[PracticeRecord::new(0.0, 100.0, 0.5)]);
        assert_eq!(r.potential_increase, 31200.0);
        assert_eq!(r.payback_period, 1.0);
    }

    #[test]
    fn adoption_step_alone_drives_potential() {
        let r = compute_roi(&[PracticeRecord::new(0.0, 2500.0, 0.0)]);
        // 0.0 roi + 1 * 0.02 adoption
        assert_eq!(r.potential_increase, 1200.0);
        assert_eq!(r.payback_period, 2.1);
    }

    #[test]
    fn zero_potential_uses_unit_divisor() {
        let r = compute_roi(&[PracticeRecord::new(0.0, 3.0, -1.0)]);
        assert_eq!(r.potential_increase, 0.0);
        assert_eq!(r.payback_period, 3.0);
        assert_eq!(r.roi, -0.95);
    }

    #[test]
    fn potential_capped_at_ceiling() {
        let r = compute_roi(&[PracticeRecord::new(0.0, 1000.0, 3.0)]);
        assert_eq!(r.potential_increase, 60_000.0);
        assert_eq!(r.roi, 3.05);
    }

    #[test]
    fn default_selection() {
        // costs 8000+5000+22000+6000+0, roi mean (0.15+0.20+0.15+0.17+0)/5 = 0.134
        let r = compute_roi(&PracticeSelection::default().records());
        assert_eq!(r.roi, 0.18);
        assert_eq!(r.potential_increase, 14040.0);
        assert_eq!(r.payback_period, 2.9);
    }
}
