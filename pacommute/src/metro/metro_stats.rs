/// published commute statistics for a Pennsylvania metro area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetroStats {
    pub metro: &'static str,
    /// mean one-way commute in minutes
    pub avg_commute: f64,
    pub workers: u64,
    pub drive_alone_pct: u32,
    pub transit_pct: u32,
    pub median_income: u32,
}

/// the four largest Pennsylvania metros
pub const PA_METROS: [MetroStats; 4] = [
    MetroStats {
        metro: "Philadelphia",
        avg_commute: 32.5,
        workers: 2_100_000,
        drive_alone_pct: 65,
        transit_pct: 25,
        median_income: 72_000,
    },
    MetroStats {
        metro: "Pittsburgh",
        avg_commute: 26.8,
        workers: 980_000,
        drive_alone_pct: 73,
        transit_pct: 12,
        median_income: 58_000,
    },
    MetroStats {
        metro: "Harrisburg",
        avg_commute: 24.5,
        workers: 290_000,
        drive_alone_pct: 82,
        transit_pct: 3,
        median_income: 54_000,
    },
    MetroStats {
        metro: "Allentown",
        avg_commute: 25.2,
        workers: 380_000,
        drive_alone_pct: 80,
        transit_pct: 4,
        median_income: 56_000,
    },
];
