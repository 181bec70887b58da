use super::{ModeShift, ShiftTarget};
use serde::{Deserialize, Serialize};

/// share of commuters by travel mode, in percent. the shares are not
/// required to sum to 100.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ModeSplit {
    pub drive_alone_pct: f64,
    pub transit_pct: f64,
    pub wfh_pct: f64,
}

impl ModeSplit {
    /// moves `shift.points` percentage points from driving alone to the
    /// shift's target mode. shares are not renormalized afterward.
    pub fn shifted(&self, shift: &ModeShift) -> ModeSplit {
        let drive_alone_pct = self.drive_alone_pct - shift.points;
        match shift.target {
            ShiftTarget::Transit => ModeSplit {
                drive_alone_pct,
                transit_pct: self.transit_pct + shift.points,
                wfh_pct: self.wfh_pct,
            },
            ShiftTarget::WorkFromHome => ModeSplit {
                drive_alone_pct,
                transit_pct: self.transit_pct,
                wfh_pct: self.wfh_pct + shift.points,
            },
        }
    }
}
