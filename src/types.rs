use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::practice::PracticeRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub acres: u32,
    pub location: String,
    pub primary_crops: Vec<String>,
    pub soil_type: String,
    pub climate_zone: String,
    pub established_year: u16,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CreditStatus {
    Pending,
    Verified,
    Sold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonCredit {
    pub id: String,
    /// tCO2e.
    pub amount: f64,
    /// USD per ton.
    pub price: f64,
    pub marketplace: String,
    pub date: NaiveDate,
    pub status: CreditStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeCategory {
    Tillage,
    CoverCrops,
    Fertilizer,
    Rotation,
    Livestock,
}

impl PracticeCategory {
    pub fn key(self) -> &'static str {
        match self {
            PracticeCategory::Tillage => "tillage",
            PracticeCategory::CoverCrops => "cover-crops",
            PracticeCategory::Fertilizer => "fertilizer",
            PracticeCategory::Rotation => "rotation",
            PracticeCategory::Livestock => "livestock",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PracticeStatus {
    Planned,
    Implemented,
    Evaluating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainablePractice {
    pub id: String,
    pub name: String,
    pub category: PracticeCategory,
    pub status: PracticeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_time: Option<String>,
    /// Present once the practice has been priced from the lookup tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<PracticeRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarbonFootprint {
    pub total_emissions: f64,
    pub sequestration: f64,
    pub net_footprint: f64,
    pub reduction_percentage: f64,
}

/// Sub-scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegenerativeScore {
    pub soil_health: u8,
    pub biodiversity: u8,
    pub water_conservation: u8,
    pub carbon_sequestration: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    /// Fahrenheit.
    pub temperature: f64,
    pub humidity: f64,
    /// Inches.
    pub precipitation: f64,
    /// mph.
    pub wind_speed: f64,
    pub conditions: String,
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    pub verra_price: f64,
    pub gold_standard_price: f64,
    pub carbon_credits_price: f64,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RevenueProjection {
    pub current_practices: f64,
    pub with_improvements: f64,
    pub potential_increase: f64,
    pub roi: f64,
    pub payback_period: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplyChainEmission {
    pub source: String,
    /// tCO2e.
    pub emissions: f64,
    /// Share of the total, percent.
    pub percentage: f64,
    /// Reducible share, percent.
    pub optimization_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyCarbon {
    pub month: String,
    pub credits: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeerBenchmark {
    pub name: String,
    pub score: u8,
}
