mod statewide_row;
mod summary_ops;
mod summary_stats;

pub use statewide_row::StatewideRow;
pub use summary_ops::{
    annual_hours_lost, summarize_statewide, STATEWIDE_ANNUAL_COMMUTE_COST,
    STATEWIDE_MEDIAN_INCOME,
};
pub use summary_stats::SummaryStats;
