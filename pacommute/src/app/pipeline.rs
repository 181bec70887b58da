//! load -> transform -> save stages of a run. each stage runs to completion
//! before the next; the summary is computed before the stages that read it.
use super::{PipelineError, RunConfig, SourceDataset};
use crate::{
    emissions::{compute_county_emissions, CountyEmissions},
    map::{join_county_coordinates, MapPoint, PA_COUNTY_COORDINATES},
    metro::{compare_metros, MetroRecord, PA_METROS},
    output::{self, OutputFile},
    scenario::{build_scenarios, Scenarios, MODE_SHIFTS},
    summary::{summarize_statewide, SummaryStats},
};
use pacommute_core::{model::Table, source};
use std::path::PathBuf;

/// a file written by a run, with a short description of its contents
#[derive(Clone, Debug, PartialEq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub description: &'static str,
}

impl WrittenFile {
    fn new(path: PathBuf, description: &'static str) -> WrittenFile {
        WrittenFile { path, description }
    }
}

/// everything computed by a full run
#[derive(Clone, Debug)]
pub struct PipelineOutputs {
    pub summary: SummaryStats,
    pub emissions: CountyEmissions,
    pub scenarios: Scenarios,
    pub metros: Vec<MetroRecord>,
    pub map_points: Vec<MapPoint>,
    pub written: Vec<WrittenFile>,
}

/// runs every stage: source mirrors, statewide summary, county emissions,
/// mode-shift scenarios, metro comparison, and county map data.
pub fn run_pipeline(config: &RunConfig) -> Result<PipelineOutputs, PipelineError> {
    log::info!("starting run at {}", chrono::Local::now().to_rfc3339());
    output::create_dirs(&config.output_directory)?;

    let sources = load_sources(config, &SourceDataset::ALL)?;
    let mut written = write_mirrors(config, &sources)?;
    let commute = commute_table(&sources)?;

    let statewide = config.statewide_row.select(commute)?;
    let summary = summarize_statewide(statewide)?;
    let summary_path = config.output_path(OutputFile::SummaryStats);
    output::write_json(&summary_path, &summary)?;
    written.push(WrittenFile::new(summary_path, OutputFile::SummaryStats.description()));

    let emissions = compute_county_emissions(commute);
    written.extend(write_county_emissions(config, &emissions)?);

    let scenarios = build_scenarios(&summary.mode_split(), summary.total_commuters, &MODE_SHIFTS);
    let scenarios_path = config.output_path(OutputFile::Scenarios);
    output::write_json(&scenarios_path, &scenarios)?;
    written.push(WrittenFile::new(scenarios_path, OutputFile::Scenarios.description()));

    let metros = compare_metros(&PA_METROS);
    let metros_path = config.output_path(OutputFile::MetroComparison);
    output::write_json(&metros_path, &metros)?;
    written.push(WrittenFile::new(metros_path, OutputFile::MetroComparison.description()));

    let map_points = join_county_coordinates(&emissions.records, &PA_COUNTY_COORDINATES);
    let map_path = config.output_path(OutputFile::CountyMapData);
    output::write_json(&map_path, &map_points)?;
    written.push(WrittenFile::new(map_path, OutputFile::CountyMapData.description()));

    log::info!("finished run, wrote {} files", written.len());
    Ok(PipelineOutputs {
        summary,
        emissions,
        scenarios,
        metros,
        map_points,
        written,
    })
}

/// writes a JSON mirror of every source table and nothing else.
pub fn run_convert(config: &RunConfig) -> Result<Vec<WrittenFile>, PipelineError> {
    output::create_dirs(&config.output_directory)?;
    let sources = load_sources(config, &SourceDataset::ALL)?;
    write_mirrors(config, &sources)
}

/// computes and writes the county emissions table only.
pub fn run_emissions(
    config: &RunConfig,
) -> Result<(CountyEmissions, Vec<WrittenFile>), PipelineError> {
    output::create_dirs(&config.output_directory)?;
    let sources = load_sources(config, &[SourceDataset::Commute])?;
    let emissions = compute_county_emissions(commute_table(&sources)?);
    let written = write_county_emissions(config, &emissions)?;
    Ok((emissions, written))
}

/// loads source tables in order. any missing or malformed source fails the run.
pub fn load_sources(
    config: &RunConfig,
    datasets: &[SourceDataset],
) -> Result<Vec<(SourceDataset, Table)>, PipelineError> {
    datasets
        .iter()
        .map(|dataset| -> Result<(SourceDataset, Table), PipelineError> {
            let table = source::read_table(config.source_path(*dataset))?;
            Ok((*dataset, table))
        })
        .collect()
}

/// writes each source table as a JSON array of records, in source column order.
pub fn write_mirrors(
    config: &RunConfig,
    sources: &[(SourceDataset, Table)],
) -> Result<Vec<WrittenFile>, PipelineError> {
    sources
        .iter()
        .map(|(dataset, table)| -> Result<WrittenFile, PipelineError> {
            let path = config.mirror_path(*dataset);
            output::write_json(&path, table.rows())?;
            Ok(WrittenFile::new(path, dataset.description()))
        })
        .collect()
}

/// writes the county table as CSV and JSON. both files are written even
/// when no county survived, as a header-only CSV and an empty JSON array.
pub fn write_county_emissions(
    config: &RunConfig,
    emissions: &CountyEmissions,
) -> Result<Vec<WrittenFile>, PipelineError> {
    let csv_path = config.output_path(OutputFile::CountyEmissionsCsv);
    let json_path = config.output_path(OutputFile::CountyEmissionsJson);
    output::write_county_csv(&csv_path, &emissions.records)?;
    output::write_json(&json_path, &emissions.records)?;
    Ok(vec![
        WrittenFile::new(csv_path, OutputFile::CountyEmissionsCsv.description()),
        WrittenFile::new(json_path, OutputFile::CountyEmissionsJson.description()),
    ])
}

fn commute_table(sources: &[(SourceDataset, Table)]) -> Result<&Table, PipelineError> {
    sources
        .iter()
        .find(|(dataset, _)| *dataset == SourceDataset::Commute)
        .map(|(_, table)| table)
        .ok_or_else(|| PipelineError::InternalError(String::from("commute table was not loaded")))
}
