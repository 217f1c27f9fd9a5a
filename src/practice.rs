use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::types::{PracticeCategory, PracticeStatus, SustainablePractice};

/// Per-practice impact triple fed into the footprint and ROI models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PracticeRecord {
    /// Signed tCO2e/year; negative is a reduction.
    pub carbon_impact: f64,
    pub cost: f64,
    /// Fractional return, 0.15 = 15%.
    pub roi: f64,
}

impl PracticeRecord {
    pub const NEUTRAL: PracticeRecord = PracticeRecord::new(0.0, 0.0, 0.0);

    pub const fn new(carbon_impact: f64, cost: f64, roi: f64) -> Self {
        Self {
            carbon_impact,
            cost,
            roi,
        }
    }
}

/// One categorical choice from a practice dropdown.
pub trait PracticeOption: Copy + fmt::Debug + FromStr<Err = TrackerError> + 'static {
    const CATEGORY: PracticeCategory;
    /// Display name of the practice row this option fills.
    const PRACTICE_NAME: &'static str;
    const IMPLEMENTATION_TIME: &'static str;

    fn all() -> &'static [Self];
    /// Kebab-case key used in config and on the command line.
    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
    fn record(self) -> PracticeRecord;
}

fn parse_option<T: PracticeOption>(s: &str) -> Result<T, TrackerError> {
    T::all()
        .iter()
        .copied()
        .find(|o| o.key().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| TrackerError::UnknownOption {
            category: T::CATEGORY.key(),
            value: s.to_string(),
        })
}

macro_rules! practice_option {
    (
        $(#[$meta:meta])*
        $name:ident, $category:expr, $practice:literal, $time:literal {
            $($variant:ident => ($key:literal, $label:literal, $impact:expr, $cost:expr, $roi:expr)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl PracticeOption for $name {
            const CATEGORY: PracticeCategory = $category;
            const PRACTICE_NAME: &'static str = $practice;
            const IMPLEMENTATION_TIME: &'static str = $time;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn record(self) -> PracticeRecord {
                match self {
                    $($name::$variant => PracticeRecord::new($impact, $cost, $roi)),+
                }
            }
        }

        impl FromStr for $name {
            type Err = TrackerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_option(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

practice_option! {
    /// Tillage method.
    Tillage, PracticeCategory::Tillage, "Tillage", "3 months" {
        Conventional => ("conventional", "Conventional", 0.0, 0.0, 0.0),
        ReducedTill => ("reduced-till", "Reduced Till", -1.2, 8000.0, 0.15),
        NoTill => ("no-till", "No Till", -2.3, 15000.0, 0.18),
    }
}

practice_option! {
    CoverCrop, PracticeCategory::CoverCrops, "Cover Crops", "6 months" {
        None => ("none", "None", 0.0, 0.0, 0.0),
        SingleSpecies => ("single-species", "Single Species", -1.1, 5000.0, 0.20),
        MultiSpecies => ("multi-species", "Multi-species", -1.8, 8500.0, 0.22),
    }
}

practice_option! {
    /// Fertilizer application method.
    Fertilizer, PracticeCategory::Fertilizer, "Fertilizer", "4 months" {
        Broadcast => ("broadcast", "Broadcast", 0.0, 0.0, 0.0),
        Precision => ("precision", "Precision", -1.2, 22000.0, 0.15),
    }
}

practice_option! {
    Rotation, PracticeCategory::Rotation, "Rotation", "6 months" {
        Simple => ("simple", "Simple", 0.0, 0.0, 0.0),
        Diverse => ("diverse", "Diverse", -1.4, 6000.0, 0.17),
    }
}

practice_option! {
    Livestock, PracticeCategory::Livestock, "Livestock", "6 months" {
        None => ("none", "None", 0.0, 0.0, 0.0),
        Integrated => ("integrated", "Integrated", -1.5, 18000.0, 0.20),
    }
}

/// The five dropdown choices of the carbon calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeSelection {
    pub tillage: Tillage,
    pub cover: CoverCrop,
    pub fertilizer: Fertilizer,
    pub rotation: Rotation,
    pub livestock: Livestock,
}

impl Default for PracticeSelection {
    fn default() -> Self {
        Self {
            tillage: Tillage::ReducedTill,
            cover: CoverCrop::SingleSpecies,
            fertilizer: Fertilizer::Precision,
            rotation: Rotation::Diverse,
            livestock: Livestock::None,
        }
    }
}

impl PracticeSelection {
    /// Impact records in fixed category order: tillage, cover, fertilizer,
    /// rotation, livestock.
    pub fn records(&self) -> Vec<PracticeRecord> {
        vec![
            self.tillage.record(),
            self.cover.record(),
            self.fertilizer.record(),
            self.rotation.record(),
            self.livestock.record(),
        ]
    }

    /// Full practice rows, all marked implemented.
    pub fn practices(&self) -> Vec<SustainablePractice> {
        vec![
            implemented("p1", self.tillage),
            implemented("p2", self.cover),
            implemented("p3", self.fertilizer),
            implemented("p4", self.rotation),
            implemented("p5", self.livestock),
        ]
    }
}

fn implemented<O: PracticeOption>(id: &str, option: O) -> SustainablePractice {
    SustainablePractice {
        id: id.to_string(),
        name: O::PRACTICE_NAME.to_string(),
        category: O::CATEGORY,
        status: PracticeStatus::Implemented,
        implementation_time: Some(O::IMPLEMENTATION_TIME.to_string()),
        impact: Some(option.record()),
    }
}

/// Practices that reduce emissions, best ROI first.
pub fn recommendations(practices: &[SustainablePractice]) -> Vec<&SustainablePractice> {
    let mut picked: Vec<&SustainablePractice> = practices
        .iter()
        .filter(|p| p.impact.is_some_and(|r| r.carbon_impact < 0.0))
        .collect();
    // sort_by is stable; equal ROI keeps selection order.
    picked.sort_by(|a, b| {
        let ra = a.impact.map_or(0.0, |r| r.roi);
        let rb = b.impact.map_or(0.0, |r| r.roi);
        rb.total_cmp(&ra)
    });
    picked
}
