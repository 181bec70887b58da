use super::{ModeShift, ModeSplit, Scenario, BASELINE_SCENARIO_ID, BASELINE_SCENARIO_NAME};
use crate::emission_factors::{ModeEmissionFactors, KG_PER_TON, MODE_EMISSION_FACTORS};
use indexmap::IndexMap;

/// scenarios keyed by id, baseline first
pub type Scenarios = IndexMap<String, Scenario>;

/// annual commute CO2 in tons for a mode split: commuters in each mode times
/// that mode's per-commuter emission factor.
pub fn scenario_emissions_tons(
    split: &ModeSplit,
    total_commuters: i64,
    factors: &ModeEmissionFactors,
) -> f64 {
    let total = total_commuters as f64;
    let drive_commuters = total * (split.drive_alone_pct / 100.0);
    let transit_commuters = total * (split.transit_pct / 100.0);
    let wfh_commuters = total * (split.wfh_pct / 100.0);
    (drive_commuters * factors.drive_alone_kg_per_year
        + transit_commuters * factors.transit_kg_per_year
        + wfh_commuters * factors.work_from_home_kg_per_year)
        / KG_PER_TON
}

/// builds the baseline scenario from the current mode split, followed by one
/// scenario per shift, each compared against the baseline.
pub fn build_scenarios(
    current: &ModeSplit,
    total_commuters: i64,
    shifts: &[ModeShift],
) -> Scenarios {
    let factors = &MODE_EMISSION_FACTORS;
    let baseline = Scenario::baseline(
        BASELINE_SCENARIO_NAME,
        *current,
        scenario_emissions_tons(current, total_commuters, factors),
    );

    let mut scenarios = Scenarios::new();
    scenarios.insert(BASELINE_SCENARIO_ID.to_string(), baseline.clone());
    for shift in shifts.iter() {
        let split = current.shifted(shift);
        let emissions = scenario_emissions_tons(&split, total_commuters, factors);
        let scenario = Scenario::compared_to(shift.name, split, emissions, &baseline);
        log::debug!("scenario {}: {emissions} tons", shift.id);
        scenarios.insert(shift.id.to_string(), scenario);
    }
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::MODE_SHIFTS;

    const CURRENT: ModeSplit = ModeSplit {
        drive_alone_pct: 65.0,
        transit_pct: 25.0,
        wfh_pct: 10.0,
    };

    #[test]
    fn test_baseline_emissions() {
        // 650k * 2580 + 250k * 580 = 1,677,000,000 + 145,000,000 kg
        let tons = scenario_emissions_tons(&CURRENT, 1_000_000, &MODE_EMISSION_FACTORS);
        assert!((tons - 1_822_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_transit_shift() {
        let scenarios = build_scenarios(&CURRENT, 1_000_000, &MODE_SHIFTS);
        let transit = &scenarios["10pct_transit"];
        assert_eq!(transit.mode_split.drive_alone_pct, 55.0);
        assert_eq!(transit.mode_split.transit_pct, 35.0);
        assert_eq!(transit.mode_split.wfh_pct, 10.0);
        assert!(transit.emissions_tons < scenarios["current"].emissions_tons);
    }

    #[test]
    fn test_wfh_shift_is_not_renormalized() {
        let split = CURRENT.shifted(&MODE_SHIFTS[1]);
        assert_eq!(split.drive_alone_pct, 50.0);
        assert_eq!(split.transit_pct, 25.0);
        assert_eq!(split.wfh_pct, 25.0);

        let off_total = ModeSplit {
            drive_alone_pct: 70.0,
            transit_pct: 5.0,
            wfh_pct: 8.0,
        };
        let shifted = off_total.shifted(&MODE_SHIFTS[1]);
        let sum = shifted.drive_alone_pct + shifted.transit_pct + shifted.wfh_pct;
        assert_eq!(sum, 83.0);
    }

    #[test]
    fn test_reductions_only_on_hypotheticals() {
        let scenarios = build_scenarios(&CURRENT, 1_000_000, &MODE_SHIFTS);
        let ids = scenarios.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["current", "10pct_transit", "20pct_wfh"]);

        let current = &scenarios["current"];
        assert_eq!(current.emissions_reduced, None);
        assert_eq!(current.pct_reduction, None);
        for id in ["10pct_transit", "20pct_wfh"] {
            let s = &scenarios[id];
            let reduced = s.emissions_reduced.unwrap();
            assert_eq!(reduced, current.emissions_tons - s.emissions_tons);
            let pct = s.pct_reduction.unwrap();
            assert_eq!(pct, reduced / current.emissions_tons * 100.0);
            assert!(pct > 0.0);
        }
    }

    #[test]
    fn test_zero_commuters_has_zero_reduction() {
        let scenarios = build_scenarios(&CURRENT, 0, &MODE_SHIFTS);
        let wfh = &scenarios["20pct_wfh"];
        assert_eq!(wfh.emissions_tons, 0.0);
        assert_eq!(wfh.emissions_reduced, Some(0.0));
        assert_eq!(wfh.pct_reduction, Some(0.0));
    }

    #[test]
    fn test_serialized_shape() {
        let scenarios = build_scenarios(&CURRENT, 1_000_000, &MODE_SHIFTS);
        let text = serde_json::to_string(&scenarios).unwrap();
        let expected_start =
            r#"{"current":{"name":"Current (2024)","mode_split":{"drive_alone_pct":65.0"#;
        assert!(text.starts_with(expected_start));
        assert_eq!(text.matches("emissions_reduced").count(), 2);
        assert_eq!(text.matches("pct_reduction").count(), 2);
    }
}
