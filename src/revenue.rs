use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::num::round_to;
use crate::types::{PricePoint, RevenueProjection};

/// Extra ROI earned at full adoption.
const ADOPTION_ROI_GAIN: f64 = 0.15;
/// Monthly price growth assumed by the forecast.
const FORECAST_MONTHLY_GROWTH: f64 = 0.01;

/// Revenue estimate for a given share of recommended practices adopted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueScenario {
    pub adoption: f64,
    pub projected_revenue: f64,
    pub projected_roi: f64,
    /// Annualized improvement over current practices.
    pub delta: f64,
}

impl RevenueScenario {
    pub fn new(projection: &RevenueProjection, adoption: f64) -> Result<Self, TrackerError> {
        if !(0.0..=1.0).contains(&adoption) {
            return Err(TrackerError::InvalidAdoption(adoption));
        }
        let projected_revenue =
            round_to(projection.current_practices + projection.potential_increase * adoption, 0);
        Ok(Self {
            adoption,
            projected_revenue,
            projected_roi: round_to(projection.roi + adoption * ADOPTION_ROI_GAIN, 2),
            delta: projected_revenue - projection.current_practices,
        })
    }
}

/// Price history extended by `months` forecast points labelled `+1m`, `+2m`, ...
///
/// Growth compounds linearly off the last observed price, or off `spot` when
/// there is no history.
pub fn forecast(history: &[PricePoint], spot: f64, months: u32) -> Vec<PricePoint> {
    let last = history.last().map_or(spot, |p| p.price);
    let mut out = history.to_vec();
    out.extend((1..=months).map(|i| PricePoint {
        date: format!("+{i}m"),
        price: round_to(last * (1.0 + f64::from(i) * FORECAST_MONTHLY_GROWTH), 2),
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sixty_percent_adoption() {
        let s = RevenueScenario::new(&fixtures::revenue_projection(), 0.6).unwrap();
        assert_eq!(s.projected_revenue, 221_000.0);
        assert_eq!(s.projected_roi, 0.31);
        assert_eq!(s.delta, 36_000.0);
    }

    #[test]
    fn adoption_bounds() {
        let p = fixtures::revenue_projection();
        assert!(RevenueScenario::new(&p, 0.0).is_ok());
        assert!(RevenueScenario::new(&p, 1.0).is_ok());
        assert!(matches!(
            RevenueScenario::new(&p, 1.2),
            Err(TrackerError::InvalidAdoption(_))
        ));
        assert!(RevenueScenario::new(&p, f64::NAN).is_err());
    }

    #[test]
    fn forecast_extends_history() {
        let out = forecast(&fixtures::price_history(), 9.0, 4);
        assert_eq!(out.len(), 11);
        let tail: Vec<(&str, f64)> = out[7..].iter().map(|p| (p.date.as_str(), p.price)).collect();
        // 8.1 * 1.01, 1.02, 1.03, 1.04
        assert_eq!(tail, vec![("+1m", 8.18), ("+2m", 8.26), ("+3m", 8.34), ("+4m", 8.42)]);
    }

    #[test]
    fn forecast_without_history_uses_spot() {
        let out = forecast(&[], 10.0, 2);
        assert_eq!(out[0].price, 10.1);
        assert_eq!(out[1].price, 10.2);
    }
}
