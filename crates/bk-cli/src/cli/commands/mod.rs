//! CLI command handlers, one per file.

mod config;
mod download;
mod filename;
mod parse;
mod probe;
mod routes;

pub use config::run_config;
pub use download::run_download;
pub use filename::run_filename;
pub use parse::run_parse;
pub use probe::run_probe;
pub use routes::run_routes;
