pub mod config;
pub mod logging;

pub mod api;
pub mod disposition;
pub mod fetch_head;
pub mod headers;
pub mod routes;

pub use disposition::{
    filename_from_header_value, filename_from_response, DefaultFilenameExtractor, ExtractError,
    FilenameExtractor,
};
pub use headers::{HeaderSet, ResponseHeaders};
