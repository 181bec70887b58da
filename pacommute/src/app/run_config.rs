use super::{PipelineError, SourceDataset};
use crate::{
    output::{mirror_filename, OutputFile},
    summary::StatewideRow,
};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// locations of the source tables and outputs for a run. every field is
/// optional in a configuration file; omitted fields take the defaults, which
/// read from and write to the working directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub commute_file: String,
    pub affordability_index_file: String,
    pub fair_market_rents_file: String,
    pub metro_wages_file: String,
    pub nonmetro_wages_file: String,
    pub statewide_row: StatewideRow,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_directory: PathBuf::from("."),
            output_directory: PathBuf::from("."),
            commute_file: String::from("PA_SO802_Final_1924.csv"),
            affordability_index_file: String::from("PA_Location_Affordability_Index_v3.xlsx"),
            fair_market_rents_file: String::from("PA_FY24_FMRs.xlsx"),
            metro_wages_file: String::from("PA_METRO_WAGES_2024.xlsx"),
            nonmetro_wages_file: String::from("PA_NONMETRO_WAGES_2024.xlsx"),
            statewide_row: StatewideRow::default(),
        }
    }
}

impl RunConfig {
    /// reads a TOML run configuration, or the defaults when no file is given.
    pub fn load(config_file: Option<&str>) -> Result<RunConfig, PipelineError> {
        let mut builder = Config::builder();
        if let Some(f) = config_file {
            builder = builder.add_source(config::File::new(f, config::FileFormat::Toml));
        }
        let config = builder
            .build()
            .map_err(|source| PipelineError::ConfigReadError {
                msg: format!(
                    "failed reading '{}'",
                    config_file.unwrap_or("default configuration")
                ),
                source,
            })?;
        config
            .try_deserialize::<RunConfig>()
            .map_err(|source| PipelineError::ConfigReadError {
                msg: String::from("failed decoding run configuration"),
                source,
            })
    }

    pub fn source_filename(&self, dataset: SourceDataset) -> &str {
        match dataset {
            SourceDataset::Commute => &self.commute_file,
            SourceDataset::AffordabilityIndex => &self.affordability_index_file,
            SourceDataset::FairMarketRents => &self.fair_market_rents_file,
            SourceDataset::MetroWages => &self.metro_wages_file,
            SourceDataset::NonMetroWages => &self.nonmetro_wages_file,
        }
    }

    pub fn source_path(&self, dataset: SourceDataset) -> PathBuf {
        self.input_directory.join(self.source_filename(dataset))
    }

    /// output path of the JSON mirror of a source table
    pub fn mirror_path(&self, dataset: SourceDataset) -> PathBuf {
        let source = self.source_path(dataset);
        self.output_directory.join(mirror_filename(&source))
    }

    pub fn output_path(&self, file: OutputFile) -> PathBuf {
        self.output_directory.join(file.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = RunConfig::load(None).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(
            config.source_path(SourceDataset::Commute),
            Path::new(".").join("PA_SO802_Final_1924.csv")
        );
        assert_eq!(
            config.mirror_path(SourceDataset::FairMarketRents),
            Path::new(".").join("PA_FY24_FMRs.json")
        );
        assert_eq!(config.statewide_row.position, 1);
    }

    #[test]
    fn test_partial_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        let toml = r#"
input_directory = "data/pa"
output_directory = "out"
commute_file = "S0802.csv"

[statewide_row]
name = "Pennsylvania"
"#;
        std::fs::write(&path, toml).unwrap();
        let config = RunConfig::load(path.to_str()).unwrap();
        assert_eq!(config.input_directory, PathBuf::from("data/pa"));
        assert_eq!(
            config.output_path(OutputFile::Scenarios),
            Path::new("out").join("pa_scenarios.json")
        );
        assert_eq!(config.commute_file, "S0802.csv");
        assert_eq!(config.fair_market_rents_file, "PA_FY24_FMRs.xlsx");
        assert_eq!(config.statewide_row.name.as_deref(), Some("Pennsylvania"));
        assert_eq!(config.statewide_row.position, 1);
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("pa-commute-config.toml");
        let config = RunConfig::load(path.to_str()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let result = RunConfig::load(Some("does/not/exist.toml"));
        assert!(matches!(
            result,
            Err(PipelineError::ConfigReadError { .. })
        ));
    }
}
