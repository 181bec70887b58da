mod commute_app;
mod pipeline;
mod pipeline_error;
mod report;
mod run_config;
mod source_dataset;

pub use commute_app::{CommuteApp, CommuteOperation, RunArgs};
pub use pipeline::{
    load_sources, run_convert, run_emissions, run_pipeline, write_county_emissions,
    write_mirrors, PipelineOutputs, WrittenFile,
};
pub use pipeline_error::PipelineError;
pub use report::{format_thousands, write_emissions_report, write_run_report};
pub use run_config::RunConfig;
pub use source_dataset::SourceDataset;
