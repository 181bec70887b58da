mod county_emissions;
mod county_record;
mod emissions_ops;

pub use county_emissions::CountyEmissions;
pub use county_record::CountyRecord;
pub use emissions_ops::{
    compute_county_emissions, county_display_name, county_record_from_row, estimate_county,
    is_county_name, LEADING_ROWS_SKIPPED,
};
