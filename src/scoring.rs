use serde::{Deserialize, Serialize};

use crate::config::ScoringMultipliers;
use crate::num::round_to;
use crate::types::RegenerativeScore;

/// Target sub-scores after the planned improvements. `overall` is carried over.
pub fn target_score(current: &RegenerativeScore, m: &ScoringMultipliers) -> RegenerativeScore {
    let uplift = |v: u8, factor: f64| round_to(f64::from(v) * factor, 0).clamp(0.0, 100.0) as u8;
    RegenerativeScore {
        soil_health: uplift(current.soil_health, m.soil_health),
        biodiversity: uplift(current.biodiversity, m.biodiversity),
        water_conservation: uplift(current.water_conservation, m.water_conservation),
        carbon_sequestration: uplift(current.carbon_sequestration, m.carbon_sequestration),
        overall: current.overall,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarRow {
    pub metric: &'static str,
    pub current: u8,
    pub target: u8,
}

pub fn radar(current: &RegenerativeScore, target: &RegenerativeScore) -> Vec<RadarRow> {
    vec![
        RadarRow {
            metric: "Soil Health",
            current: current.soil_health,
            target: target.soil_health,
        },
        RadarRow {
            metric: "Biodiversity",
            current: current.biodiversity,
            target: target.biodiversity,
        },
        RadarRow {
            metric: "Water",
            current: current.water_conservation,
            target: target.water_conservation,
        },
        RadarRow {
            metric: "Sequestration",
            current: current.carbon_sequestration,
            target: target.carbon_sequestration,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementItem {
    pub title: &'static str,
    pub impact: Impact,
    pub gain: &'static str,
}

pub fn improvement_items() -> Vec<ImprovementItem> {
    let item = |title, impact, gain| ImprovementItem { title, impact, gain };
    vec![
        item("Increase cover crop diversity", Impact::High, "+8-12 points"),
        item("Add compost and biochar amendments", Impact::Medium, "+5-9 points"),
        item("Expand field-edge habitat", Impact::High, "+6-10 points"),
        item("Upgrade irrigation efficiency", Impact::Medium, "+4-7 points"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn fixture_targets() {
        let current = fixtures::regenerative_score();
        let target = target_score(&current, &ScoringMultipliers::default());
        // 68*1.15=78.2, 61*1.2=73.2, 72*1.1=79.2, 64*1.18=75.52
        assert_eq!(target.soil_health, 78);
        assert_eq!(target.biodiversity, 73);
        assert_eq!(target.water_conservation, 79);
        assert_eq!(target.carbon_sequestration, 76);
        assert_eq!(target.overall, 66);
    }

    #[test]
    fn targets_cap_at_hundred() {
        let high = RegenerativeScore {
            soil_health: 95,
            biodiversity: 90,
            water_conservation: 100,
            carbon_sequestration: 88,
            overall: 93,
        };
        let target = target_score(&high, &ScoringMultipliers::default());
        assert_eq!(target.soil_health, 100);
        assert_eq!(target.biodiversity, 100);
        assert_eq!(target.water_conservation, 100);
        assert_eq!(target.carbon_sequestration, 100);
    }

    #[test]
    fn radar_pairs_metrics() {
        let current = fixtures::regenerative_score();
        let target = target_score(&current, &ScoringMultipliers::default());
        let rows = radar(&current, &target);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].metric, "Water");
        assert_eq!((rows[2].current, rows[2].target), (72, 79));
        assert_eq!(improvement_items().len(), 4);
    }
}
