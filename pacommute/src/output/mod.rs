mod output_error;
mod output_file;
mod write_ops;

pub use output_error::OutputError;
pub use output_file::{mirror_filename, OutputFile};
pub use write_ops::{create_dirs, write_county_csv, write_json};
