use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::footprint::{compute_footprint_with, FootprintResult};
use crate::practice::{recommendations, PracticeSelection};
use crate::roi::{compute_roi_with, RoiResult};
use crate::types::{CarbonCredit, PracticeStatus, SustainablePractice};

/// Headline figures for the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    /// Year-to-date credits, tCO2e.
    pub total_credits: f64,
    /// Σ amount × price, USD.
    pub total_revenue: f64,
    pub active_practices: usize,
    pub tracked_practices: usize,
}

impl OverviewMetrics {
    pub fn from_credits(credits: &[CarbonCredit], practices: &[SustainablePractice]) -> Self {
        Self {
            total_credits: credits.iter().map(|c| c.amount).sum(),
            total_revenue: credits.iter().map(|c| c.amount * c.price).sum(),
            active_practices: practices
                .iter()
                .filter(|p| p.status == PracticeStatus::Implemented)
                .count(),
            tracked_practices: practices.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: &'static str,
    pub current: f64,
    pub improved: f64,
}

/// Current vs improved footprint, as plotted by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintComparison {
    pub rows: Vec<ComparisonRow>,
    /// Emissions avoided against the current footprint, tCO2e.
    pub carbon_reduction: f64,
}

pub fn compare(current: &FootprintResult, improved: &FootprintResult) -> FootprintComparison {
    let row = |name, current, improved| ComparisonRow {
        name,
        current,
        improved,
    };
    FootprintComparison {
        rows: vec![
            row("Total Emissions", current.total_emissions, improved.total_emissions),
            row("Sequestration", current.sequestration, improved.sequestration),
            row("Net Footprint", current.net_footprint, improved.net_footprint),
        ],
        carbon_reduction: current.total_emissions - improved.total_emissions,
    }
}

/// Everything the carbon calculator shows for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    pub selection: PracticeSelection,
    pub footprint: FootprintResult,
    pub roi: RoiResult,
    pub comparison: FootprintComparison,
    /// Emission-reducing practices, best ROI first.
    pub recommendations: Vec<SustainablePractice>,
}

impl CalculatorView {
    /// Run both models for `selection`, comparing against `current`.
    pub fn build(
        cfg: &ModelConfig,
        selection: PracticeSelection,
        current: &FootprintResult,
    ) -> Self {
        let records = selection.records();
        let footprint = compute_footprint_with(cfg, &records);
        let roi = compute_roi_with(cfg, &records);
        let practices = selection.practices();
        Self {
            selection,
            comparison: compare(current, &footprint),
            footprint,
            roi,
            recommendations: recommendations(&practices).into_iter().cloned().collect(),
        }
    }
}
