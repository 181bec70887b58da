use serde::{Deserialize, Serialize};

/// estimated annual commute CO2 for one county.
///
/// `co2_per_capita_tons` is `annual_co2_tons / total_workers`, or 0 when the
/// county has no workers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountyRecord {
    pub county: String,
    pub total_workers: u64,
    pub mean_commute_minutes: f64,
    pub drive_alone_pct: f64,
    pub annual_co2_tons: f64,
    pub co2_per_capita_tons: f64,
}

impl CountyRecord {
    /// CSV header, in field order
    pub const COLUMNS: [&'static str; 6] = [
        "county",
        "total_workers",
        "mean_commute_minutes",
        "drive_alone_pct",
        "annual_co2_tons",
        "co2_per_capita_tons",
    ];
}
