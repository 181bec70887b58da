//! fixed emission and travel assumptions. these are not user-configurable.

/// kilograms in a metric ton
pub const KG_PER_TON: f64 = 1000.0;

/// assumptions used to turn commute durations into vehicle miles and CO2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommuteEmissionFactors {
    /// average commute speed in miles per minute of travel
    pub miles_per_minute: f64,
    /// one trip out, one trip back
    pub trips_per_workday: f64,
    pub workdays_per_week: f64,
    pub work_weeks_per_year: f64,
    /// approximate annual workdays, used by the metro comparison
    pub workdays_per_year: f64,
    /// fleet-average fuel economy
    pub miles_per_gallon: f64,
    /// tailpipe CO2 from one gallon of gasoline
    pub kg_co2_per_gallon: f64,
}

pub const COMMUTE_EMISSION_FACTORS: CommuteEmissionFactors = CommuteEmissionFactors {
    miles_per_minute: 0.5,
    trips_per_workday: 2.0,
    workdays_per_week: 5.0,
    work_weeks_per_year: 50.0,
    workdays_per_year: 250.0,
    miles_per_gallon: 25.0,
    kg_co2_per_gallon: 8.887,
};

/// annual CO2 per commuter by travel mode, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeEmissionFactors {
    /// roughly 10k miles per year at 25 mpg
    pub drive_alone_kg_per_year: f64,
    pub transit_kg_per_year: f64,
    pub work_from_home_kg_per_year: f64,
}

pub const MODE_EMISSION_FACTORS: ModeEmissionFactors = ModeEmissionFactors {
    drive_alone_kg_per_year: 2580.0,
    transit_kg_per_year: 580.0,
    work_from_home_kg_per_year: 0.0,
};
