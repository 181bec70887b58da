use super::SummaryStats;
use crate::{emission_factors::COMMUTE_EMISSION_FACTORS as F, s0802};
use pacommute_core::{
    model::{Row, RowError},
    util::coerce,
};

/// approximate statewide median income, from the wage tables
pub const STATEWIDE_MEDIAN_INCOME: u32 = 68_000;
/// average annual commuting cost per household, from the affordability index
pub const STATEWIDE_ANNUAL_COMMUTE_COST: u32 = 8_740;

/// extracts statewide totals from the statewide S0802 row.
pub fn summarize_statewide(row: &Row) -> Result<SummaryStats, RowError> {
    let total_commuters = coerce::coerce_int(row.get(s0802::TOTAL_WORKERS)?);
    let avg_commute_minutes = coerce::coerce_float(row.get(s0802::MEAN_TRAVEL_TIME)?);
    let drive_alone_pct = coerce::coerce_float(row.get(s0802::DROVE_ALONE_PCT)?);
    let transit_pct = coerce::coerce_float(row.get(s0802::PUBLIC_TRANSIT_PCT)?);
    let wfh_pct = coerce::coerce_float(row.get(s0802::WORKED_FROM_HOME_PCT)?);

    Ok(SummaryStats {
        total_commuters,
        avg_commute_minutes,
        drive_alone_pct,
        transit_pct,
        wfh_pct,
        median_income: STATEWIDE_MEDIAN_INCOME,
        annual_hours_lost: annual_hours_lost(avg_commute_minutes, total_commuters),
        annual_cost_avg: STATEWIDE_ANNUAL_COMMUTE_COST,
    })
}

/// total yearly hours spent commuting, both directions, across all commuters
pub fn annual_hours_lost(avg_commute_minutes: f64, total_commuters: i64) -> f64 {
    avg_commute_minutes
        * F.trips_per_workday
        * F.workdays_per_week
        * F.work_weeks_per_year
        * total_commuters as f64
        / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statewide_row() -> Row {
        let mut row = Row::new();
        row.insert(s0802::NAME, "Pennsylvania");
        row.insert(s0802::TOTAL_WORKERS, "6,105,542");
        row.insert(s0802::MEAN_TRAVEL_TIME, "27.2");
        row.insert(s0802::DROVE_ALONE_PCT, "73.1");
        row.insert(s0802::PUBLIC_TRANSIT_PCT, "4.6");
        row.insert(s0802::WORKED_FROM_HOME_PCT, "N");
        row
    }

    #[test]
    fn test_summarize_statewide() {
        let summary = summarize_statewide(&statewide_row()).unwrap();
        assert_eq!(summary.total_commuters, 6_105_542);
        assert_eq!(summary.avg_commute_minutes, 27.2);
        assert_eq!(summary.drive_alone_pct, 73.1);
        assert_eq!(summary.transit_pct, 4.6);
        assert_eq!(summary.wfh_pct, 0.0);
        assert_eq!(summary.median_income, 68_000);
        assert_eq!(summary.annual_cost_avg, 8_740);
        let expected = 27.2 * 500.0 * 6_105_542.0 / 60.0;
        assert!((summary.annual_hours_lost - expected).abs() < 1e-3);
    }

    #[test]
    fn test_annual_hours_lost() {
        // 30 minutes, 1000 commuters: 30 * 2 * 5 * 50 * 1000 / 60
        assert_eq!(annual_hours_lost(30.0, 1000), 250_000.0);
        assert_eq!(annual_hours_lost(30.0, 0), 0.0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut row = Row::new();
        row.insert(s0802::TOTAL_WORKERS, "100");
        assert!(matches!(
            summarize_statewide(&row),
            Err(RowError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_serialized_field_order() {
        let summary = summarize_statewide(&statewide_row()).unwrap();
        let text = serde_json::to_string(&summary).unwrap();
        assert!(text.starts_with(r#"{"total_commuters":6105542,"avg_commute_minutes":27.2,"#));
        assert!(text.ends_with(r#""annual_cost_avg":8740}"#));
    }
}
