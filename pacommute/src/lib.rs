//! Pennsylvania commute statistics: statewide summary, county commute CO2
//! estimates, mode-shift scenarios, metro comparison, and county map data,
//! computed from the ACS S0802 commuting table and written as JSON/CSV files.
pub mod app;
pub mod emission_factors;
pub mod emissions;
pub mod map;
pub mod metro;
pub mod output;
pub mod s0802;
pub mod scenario;
pub mod summary;
