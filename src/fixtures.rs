//! Mock data backing the demo views. Values mirror a single Iowa row-crop farm.

use chrono::{NaiveDate, Utc};

use crate::types::*;

/// Calendar date for fixture literals; evaluated in const context so an
/// impossible date fails the build.
const fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

const CC_001_DATE: NaiveDate = date(2024, 4, 12);
const CC_002_DATE: NaiveDate = date(2024, 5, 7);
const CC_003_DATE: NaiveDate = date(2024, 6, 1);

pub fn farm() -> Farm {
    Farm {
        id: "farm-001".to_string(),
        name: "Green Valley Farms".to_string(),
        acres: 1200,
        location: "Iowa, USA".to_string(),
        primary_crops: vec!["Corn".to_string(), "Soybeans".to_string()],
        soil_type: "Silty clay loam".to_string(),
        climate_zone: "Humid Continental".to_string(),
        established_year: 1985,
    }
}

pub fn carbon_credits() -> Vec<CarbonCredit> {
    let credit = |id: &str, amount, price, marketplace: &str, d, status| CarbonCredit {
        id: id.to_string(),
        amount,
        price,
        marketplace: marketplace.to_string(),
        date: d,
        status,
    };
    vec![
        credit("cc-001", 120.0, 7.85, "Verra", CC_001_DATE, CreditStatus::Verified),
        credit("cc-002", 95.0, 8.12, "Gold Standard", CC_002_DATE, CreditStatus::Sold),
        credit("cc-003", 135.0, 7.6, "Verra", CC_003_DATE, CreditStatus::Pending),
    ]
}

/// Reported current-year footprint. Its reduction figure comes from the
/// farm's own history, not from the practice model.
pub fn carbon_footprint() -> CarbonFootprint {
    CarbonFootprint {
        total_emissions: 5200.0,
        sequestration: 1850.0,
        net_footprint: 3350.0,
        reduction_percentage: 14.2,
    }
}

pub fn regenerative_score() -> RegenerativeScore {
    RegenerativeScore {
        soil_health: 68,
        biodiversity: 61,
        water_conservation: 72,
        carbon_sequestration: 64,
        overall: 66,
    }
}

pub fn weather() -> WeatherData {
    WeatherData {
        temperature: 77.0,
        humidity: 58.0,
        precipitation: 0.2,
        wind_speed: 9.0,
        conditions: "Partly Cloudy".to_string(),
        alerts: vec!["Heat Advisory".to_string(), "High Wind Watch".to_string()],
    }
}

pub fn market() -> MarketData {
    MarketData {
        verra_price: 7.95,
        gold_standard_price: 8.35,
        carbon_credits_price: 8.12,
        trend: Trend::Up,
        last_updated: Utc::now(),
    }
}

pub fn revenue_projection() -> RevenueProjection {
    RevenueProjection {
        current_practices: 185_000.0,
        with_improvements: 245_000.0,
        potential_increase: 60_000.0,
        roi: 0.22,
        payback_period: 3.0,
    }
}

pub fn supply_chain_emissions() -> Vec<SupplyChainEmission> {
    [
        ("Fertilizer Production", 1450.0, 34.0, 22.0),
        ("On-farm Diesel", 820.0, 19.0, 15.0),
        ("Transport", 610.0, 14.0, 18.0),
        ("Processing", 980.0, 23.0, 12.0),
        ("Packaging", 320.0, 7.0, 10.0),
    ]
    .into_iter()
    .map(|(source, emissions, percentage, optimization_potential)| SupplyChainEmission {
        source: source.to_string(),
        emissions,
        percentage,
        optimization_potential,
    })
    .collect()
}

pub fn monthly_carbon() -> Vec<MonthlyCarbon> {
    [
        ("Jan", 110.0, 840.0),
        ("Feb", 125.0, 980.0),
        ("Mar", 140.0, 1120.0),
        ("Apr", 150.0, 1190.0),
        ("May", 160.0, 1260.0),
        ("Jun", 170.0, 1325.0),
        ("Jul", 180.0, 1390.0),
        ("Aug", 175.0, 1370.0),
        ("Sep", 165.0, 1310.0),
        ("Oct", 155.0, 1250.0),
        ("Nov", 145.0, 1180.0),
        ("Dec", 135.0, 1110.0),
    ]
    .into_iter()
    .map(|(month, credits, revenue)| MonthlyCarbon {
        month: month.to_string(),
        credits,
        revenue,
    })
    .collect()
}

pub fn price_history() -> Vec<PricePoint> {
    [
        ("Jan", 7.1),
        ("Feb", 7.2),
        ("Mar", 7.4),
        ("Apr", 7.7),
        ("May", 7.9),
        ("Jun", 8.0),
        ("Jul", 8.1),
    ]
    .into_iter()
    .map(|(date, price)| PricePoint {
        date: date.to_string(),
        price,
    })
    .collect()
}

pub fn peer_benchmarks() -> Vec<PeerBenchmark> {
    [("Peer A", 72), ("Peer B", 66), ("Peer C", 70)]
        .into_iter()
        .map(|(name, score)| PeerBenchmark {
            name: name.to_string(),
            score,
        })
        .collect()
}

/// Farm-level practice status, independent of the calculator selection.
pub fn sustainable_practices() -> Vec<SustainablePractice> {
    use PracticeCategory::*;
    use PracticeStatus::*;

    [
        ("sp1", "No-till Farming", Tillage, Implemented),
        ("sp2", "Cover Crop Mix", CoverCrops, Implemented),
        ("sp3", "Precision Fertilizer", Fertilizer, Evaluating),
        ("sp4", "Diverse Rotation", Rotation, Planned),
        ("sp5", "Managed Grazing", Livestock, Implemented),
    ]
    .into_iter()
    .map(|(id, name, category, status)| SustainablePractice {
        id: id.to_string(),
        name: name.to_string(),
        category,
        status,
        implementation_time: None,
        impact: None,
    })
    .collect()
}
