pub mod logging;
pub mod output;
pub mod paths;

pub use logging::init_logging;
pub use output::{to_pretty_json, write_pretty_json};
pub use paths::{derive_output_name, ensure_dir, is_dump_file_name};
