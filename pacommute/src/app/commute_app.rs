use super::{report, run_convert, run_emissions, run_pipeline, PipelineError, RunConfig};
use clap::{Args, Parser, Subcommand};
use std::{io::Write, path::PathBuf};

/// command line tool for Pennsylvania commute, emissions, and mode-shift statistics
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CommuteApp {
    #[command(subcommand)]
    pub op: CommuteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CommuteOperation {
    /// convert every source table to JSON and compute all statistics files
    Run {
        #[command(flatten)]
        args: RunArgs,
    },
    /// convert every source table to JSON, without computing statistics
    Convert {
        #[command(flatten)]
        args: RunArgs,
    },
    /// compute the county emissions table only
    Emissions {
        #[command(flatten)]
        args: RunArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// TOML run configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// directory containing the source tables. overrides the configuration file.
    #[arg(long)]
    pub input_directory: Option<PathBuf>,
    /// directory to write outputs to. overrides the configuration file.
    #[arg(long)]
    pub output_directory: Option<PathBuf>,
}

impl RunArgs {
    pub fn run_config(&self) -> Result<RunConfig, PipelineError> {
        let mut config = RunConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.input_directory {
            config.input_directory = dir.clone();
        }
        if let Some(dir) = &self.output_directory {
            config.output_directory = dir.clone();
        }
        log::debug!("run configuration: {config:?}");
        Ok(config)
    }
}

impl CommuteOperation {
    pub fn run(&self) -> Result<(), PipelineError> {
        let mut stdout = std::io::stdout().lock();
        match self {
            CommuteOperation::Run { args } => {
                let outputs = run_pipeline(&args.run_config()?)?;
                report::write_run_report(&mut stdout, &outputs)?;
            }
            CommuteOperation::Convert { args } => {
                let written = run_convert(&args.run_config()?)?;
                for file in written.iter() {
                    writeln!(stdout, "  - {} ({})", file.path.display(), file.description)?;
                }
            }
            CommuteOperation::Emissions { args } => {
                let (emissions, _) = run_emissions(&args.run_config()?)?;
                report::write_emissions_report(&mut stdout, &emissions)?;
            }
        }
        Ok(())
    }
}
