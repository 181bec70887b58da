use std::{fmt::Display, path::Path};

/// the derived statistics files written by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFile {
    SummaryStats,
    CountyEmissionsCsv,
    CountyEmissionsJson,
    Scenarios,
    MetroComparison,
    CountyMapData,
}

impl OutputFile {
    pub fn filename(&self) -> &'static str {
        match self {
            OutputFile::SummaryStats => "pa_summary_stats.json",
            OutputFile::CountyEmissionsCsv => "pa_county_emissions.csv",
            OutputFile::CountyEmissionsJson => "pa_county_emissions.json",
            OutputFile::Scenarios => "pa_scenarios.json",
            OutputFile::MetroComparison => "pa_metro_comparison.json",
            OutputFile::CountyMapData => "pa_county_map_data.json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFile::SummaryStats => "state totals",
            OutputFile::CountyEmissionsCsv | OutputFile::CountyEmissionsJson => "all counties",
            OutputFile::Scenarios => "mode shift scenarios",
            OutputFile::MetroComparison => "major metros",
            OutputFile::CountyMapData => "mapping data",
        }
    }
}

impl Display for OutputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}

/// name of the JSON mirror of a source table: the source file name with a
/// `.json` extension.
pub fn mirror_filename(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{stem}.json")
}
