use crate::scenario::ModeSplit;
use serde::{Deserialize, Serialize};

/// statewide commute totals and rates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SummaryStats {
    pub total_commuters: i64,
    pub avg_commute_minutes: f64,
    pub drive_alone_pct: f64,
    pub transit_pct: f64,
    pub wfh_pct: f64,
    pub median_income: u32,
    /// hours per year all commuters spend traveling to and from work
    pub annual_hours_lost: f64,
    pub annual_cost_avg: u32,
}

impl SummaryStats {
    pub fn mode_split(&self) -> ModeSplit {
        ModeSplit {
            drive_alone_pct: self.drive_alone_pct,
            transit_pct: self.transit_pct,
            wfh_pct: self.wfh_pct,
        }
    }
}
