use serde::{Deserialize, Serialize};

/// a county emissions record placed at its map coordinate
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub county: String,
    pub lat: f64,
    pub lon: f64,
    pub co2_tons: f64,
    pub co2_per_capita: f64,
    pub mean_commute: f64,
}
