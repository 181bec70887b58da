mod mode_shift;
mod mode_split;
mod scenario_ops;
mod scenario_record;

pub use mode_shift::{
    ModeShift, ShiftTarget, BASELINE_SCENARIO_ID, BASELINE_SCENARIO_NAME, MODE_SHIFTS,
};
pub use mode_split::ModeSplit;
pub use scenario_ops::{build_scenarios, scenario_emissions_tons, Scenarios};
pub use scenario_record::Scenario;
