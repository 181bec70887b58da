//! county-level commute emissions estimates from S0802 rows.
use super::{CountyEmissions, CountyRecord};
use crate::{emission_factors::COMMUTE_EMISSION_FACTORS as F, emission_factors::KG_PER_TON, s0802};
use kdam::tqdm;
use pacommute_core::{
    model::{Row, RowError, Table},
    util::coerce,
};

/// rows at the top of the commute table that are never county data: the
/// column description line and the statewide total.
pub const LEADING_ROWS_SKIPPED: usize = 2;

/// estimates commute CO2 for every county row of the commute table.
///
/// the first [`LEADING_ROWS_SKIPPED`] rows are ignored, as are rows whose
/// geography is not a county. county rows missing a required column are
/// dropped and counted. records are sorted by descending annual CO2; the sort
/// is stable, so ties keep table order.
pub fn compute_county_emissions(table: &Table) -> CountyEmissions {
    let mut result = CountyEmissions::default();
    let row_iter = tqdm!(
        table.rows().iter().enumerate().skip(LEADING_ROWS_SKIPPED),
        desc = "county emissions",
        total = table.len().saturating_sub(LEADING_ROWS_SKIPPED)
    );
    for (row_idx, row) in row_iter {
        match county_record_from_row(row) {
            Ok(Some(record)) => result.records.push(record),
            Ok(None) => result.non_county_rows += 1,
            Err(e) => {
                log::debug!("dropping row {row_idx}: {e}");
                result.malformed_rows += 1;
            }
        }
    }
    eprintln!();

    if result.malformed_rows > 0 {
        log::warn!(
            "dropped {} county rows with missing columns",
            result.malformed_rows
        );
    }
    log::info!(
        "computed emissions for {} counties, skipped {} non-county rows",
        result.records.len(),
        result.non_county_rows
    );

    result
        .records
        .sort_by(|a, b| b.annual_co2_tons.total_cmp(&a.annual_co2_tons));
    result
}

/// builds a county record from one S0802 row. returns `None` when the row is
/// not a county geography, and an error when the row lacks a required column.
pub fn county_record_from_row(row: &Row) -> Result<Option<CountyRecord>, RowError> {
    let name = row.get_text(s0802::NAME)?;
    if !is_county_name(&name) {
        return Ok(None);
    }
    let total_workers = coerce::coerce_int(row.get(s0802::TOTAL_WORKERS)?);
    let mean_commute = coerce::coerce_float(row.get(s0802::MEAN_TRAVEL_TIME)?);
    let drive_alone = coerce::coerce_float(row.get(s0802::DROVE_ALONE_PCT)?);

    // negative counts are not a usable worker total
    let total_workers = u64::try_from(total_workers).unwrap_or_default();
    let record = estimate_county(
        county_display_name(&name),
        total_workers,
        mean_commute,
        drive_alone,
    );
    Ok(Some(record))
}

/// true if a geography name describes a county.
pub fn is_county_name(name: &str) -> bool {
    name.contains("County") || name.to_lowercase().contains("county")
}

/// "Adams County, Pennsylvania" -> "Adams"
pub fn county_display_name(name: &str) -> String {
    name.split(',')
        .next()
        .unwrap_or_default()
        .replace(" County", "")
}

/// estimates annual commute vehicle miles and CO2 for a county.
///
/// one-way distance is the mean commute duration at a fixed average speed;
/// annual miles assume a round trip every workday for every worker; CO2
/// follows from fleet-average fuel economy and the gasoline emission factor.
pub fn estimate_county(
    county: String,
    total_workers: u64,
    mean_commute_minutes: f64,
    drive_alone_pct: f64,
) -> CountyRecord {
    let one_way_miles = mean_commute_minutes * F.miles_per_minute;
    let annual_miles = one_way_miles
        * F.trips_per_workday
        * F.workdays_per_week
        * F.work_weeks_per_year
        * total_workers as f64;
    let gallons = annual_miles / F.miles_per_gallon;
    let annual_co2_tons = gallons * F.kg_co2_per_gallon / KG_PER_TON;
    let co2_per_capita_tons = if total_workers > 0 {
        annual_co2_tons / total_workers as f64
    } else {
        0.0
    };
    CountyRecord {
        county,
        total_workers,
        mean_commute_minutes,
        drive_alone_pct,
        annual_co2_tons,
        co2_per_capita_tons,
    }
}
