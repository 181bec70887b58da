use super::ModeSplit;
use serde::{Deserialize, Serialize};

/// commute CO2 under one mode split. the reduction fields are only present
/// on hypothetical scenarios and are relative to the current split.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub mode_split: ModeSplit,
    pub emissions_tons: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions_reduced: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct_reduction: Option<f64>,
}

impl Scenario {
    pub fn baseline(name: &str, mode_split: ModeSplit, emissions_tons: f64) -> Scenario {
        Scenario {
            name: name.to_string(),
            mode_split,
            emissions_tons,
            emissions_reduced: None,
            pct_reduction: None,
        }
    }

    /// a scenario compared against the baseline. the percent reduction is
    /// 0 when the baseline has no emissions.
    pub fn compared_to(
        name: &str,
        mode_split: ModeSplit,
        emissions_tons: f64,
        baseline: &Scenario,
    ) -> Scenario {
        let emissions_reduced = baseline.emissions_tons - emissions_tons;
        let pct_reduction = if baseline.emissions_tons != 0.0 {
            emissions_reduced / baseline.emissions_tons * 100.0
        } else {
            0.0
        };
        Scenario {
            name: name.to_string(),
            mode_split,
            emissions_tons,
            emissions_reduced: Some(emissions_reduced),
            pct_reduction: Some(pct_reduction),
        }
    }
}
