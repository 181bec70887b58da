mod metro_ops;
mod metro_record;
mod metro_stats;

pub use metro_ops::{commute_burden_score, compare_metros, metro_co2_per_worker};
pub use metro_record::MetroRecord;
pub use metro_stats::{MetroStats, PA_METROS};
