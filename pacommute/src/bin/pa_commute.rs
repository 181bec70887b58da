//! reads the Pennsylvania commute, affordability, rent, and wage tables,
//! mirrors them as JSON, and writes statewide, county, scenario, metro, and
//! map statistics files.
use clap::Parser;
use pacommute::app::CommuteApp;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CommuteApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
