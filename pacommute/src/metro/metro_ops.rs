use super::{MetroRecord, MetroStats};
use crate::emission_factors::{COMMUTE_EMISSION_FACTORS as F, KG_PER_TON};

/// compares metros by per-worker commute CO2 and commute burden, in table order.
pub fn compare_metros(metros: &[MetroStats]) -> Vec<MetroRecord> {
    metros
        .iter()
        .map(|stats| MetroRecord {
            metro: stats.metro.to_string(),
            avg_commute: stats.avg_commute,
            workers: stats.workers,
            co2_per_capita: metro_co2_per_worker(stats.avg_commute),
            transit_pct: stats.transit_pct,
            median_income: stats.median_income,
            commute_burden_score: commute_burden_score(stats.avg_commute, stats.median_income),
        })
        .collect()
}

/// annual commute CO2 in tons for one worker with the given mean commute.
pub fn metro_co2_per_worker(avg_commute: f64) -> f64 {
    let annual_miles_per_worker =
        avg_commute * F.miles_per_minute * F.trips_per_workday * F.workdays_per_year;
    (annual_miles_per_worker / F.miles_per_gallon * F.kg_co2_per_gallon) / KG_PER_TON
}

pub fn commute_burden_score(avg_commute: f64, median_income: u32) -> f64 {
    avg_commute / median_income as f64 * 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metro::PA_METROS;

    #[test]
    fn test_compare_pa_metros() {
        let result = compare_metros(&PA_METROS);
        let names = result.iter().map(|r| r.metro.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Philadelphia", "Pittsburgh", "Harrisburg", "Allentown"]);

        let philly = &result[0];
        // 32.5 * 0.5 * 2 * 250 = 8125 miles; / 25 * 8.887 / 1000
        assert!((philly.co2_per_capita - 2.888_275).abs() < 1e-9);
        assert!((philly.commute_burden_score - 32.5 / 72_000.0 * 100_000.0).abs() < 1e-12);
        assert_eq!(philly.transit_pct, 25);
        assert_eq!(philly.workers, 2_100_000);
    }

    #[test]
    fn test_longer_commute_emits_more() {
        assert!(metro_co2_per_worker(30.0) > metro_co2_per_worker(20.0));
        assert_eq!(metro_co2_per_worker(0.0), 0.0);
    }

    #[test]
    fn test_burden_score() {
        assert!((commute_burden_score(25.0, 50_000) - 50.0).abs() < 1e-12);
    }
}
