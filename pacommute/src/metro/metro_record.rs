use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MetroRecord {
    pub metro: String,
    pub avg_commute: f64,
    pub workers: u64,
    /// annual commute CO2 per worker, in tons
    pub co2_per_capita: f64,
    pub transit_pct: u32,
    pub median_income: u32,
    /// commute minutes per $100k of median income
    pub commute_burden_score: f64,
}
