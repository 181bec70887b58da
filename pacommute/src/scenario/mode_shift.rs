pub const BASELINE_SCENARIO_ID: &str = "current";
pub const BASELINE_SCENARIO_NAME: &str = "Current (2024)";

/// the travel mode that receives shifted drive-alone commuters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftTarget {
    Transit,
    WorkFromHome,
}

/// a hypothetical shift of commuters away from driving alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeShift {
    pub id: &'static str,
    pub name: &'static str,
    /// percentage points moved out of drive-alone
    pub points: f64,
    pub target: ShiftTarget,
}

/// the hypothetical scenarios compared against the current mode split
pub const MODE_SHIFTS: [ModeShift; 2] = [
    ModeShift {
        id: "10pct_transit",
        name: "10% Shift to Transit",
        points: 10.0,
        target: ShiftTarget::Transit,
    },
    ModeShift {
        id: "20pct_wfh",
        name: "20% More Remote Work",
        points: 15.0,
        target: ShiftTarget::WorkFromHome,
    },
];
