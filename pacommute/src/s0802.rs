//! column identifiers of the ACS S0802 "means of transportation to work by
//! selected characteristics" table.

/// geography name, e.g. "Adams County, Pennsylvania"
pub const NAME: &str = "NAME";
/// total workers 16 years and over
pub const TOTAL_WORKERS: &str = "S0802_C01_001E";
/// mean travel time to work in minutes
pub const MEAN_TRAVEL_TIME: &str = "S0802_C01_013E";
/// percent of workers who drove alone in a car, truck, or van
pub const DROVE_ALONE_PCT: &str = "S0802_C02_002E";
/// percent of workers who took public transportation
pub const PUBLIC_TRANSIT_PCT: &str = "S0802_C02_010E";
/// percent of workers who worked from home
pub const WORKED_FROM_HOME_PCT: &str = "S0802_C02_013E";
