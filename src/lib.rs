#![forbid(unsafe_code)]

//! Carbon footprint and ROI models for regenerative farm practices, with the
//! fixtures and derived metrics of the carbon-credit tracker demo.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod footprint;
pub mod format;
pub mod market;
pub mod num;
pub mod practice;
pub mod revenue;
pub mod roi;
pub mod scoring;
pub mod supply_chain;
pub mod types;

pub use config::ModelConfig;
pub use error::TrackerError;
pub use footprint::{compute_footprint, compute_footprint_with, FootprintResult};
pub use practice::{PracticeOption, PracticeRecord, PracticeSelection};
pub use roi::{compute_roi, compute_roi_with, RoiResult};
