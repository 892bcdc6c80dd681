//! CLI for the Blog Keeper download toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use bk_core::config;

use commands::{run_config, run_download, run_filename, run_parse, run_probe, run_routes};
use std::path::PathBuf;

/// Top-level CLI for Blog Keeper.
#[derive(Debug, Parser)]
#[command(name = "bk")]
#[command(about = "Blog Keeper: resolve download filenames from Content-Disposition", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the filename from a raw Content-Disposition header value.
    Filename {
        /// Header value, e.g. `attachment; filename="report.pdf"`.
        header_value: String,
    },

    /// Send a HEAD request and print the filename the server suggests.
    Probe {
        /// Direct HTTP/HTTPS URL.
        url: String,
        /// Extra request header as `Name: value` (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,
    },

    /// Ask the API to parse a blog post and list the files it produced.
    Parse {
        /// Blog post URL.
        url: String,
        /// Output format: html, md, pdf or mhtml (repeatable).
        #[arg(short, long = "format", value_name = "FORMAT", default_value = "md")]
        formats: Vec<String>,
    },

    /// Parse a blog post and save its files as a zip named by the server.
    Download {
        /// Blog post URL.
        url: String,
        /// Output format: html, md, pdf or mhtml (repeatable).
        #[arg(short, long = "format", value_name = "FORMAT", default_value = "md")]
        formats: Vec<String>,
        /// Directory to save the zip into (default: current directory).
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show the effective client configuration.
    Config,

    /// List the front-end page routes.
    Routes,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Filename { header_value } => run_filename(&header_value)?,
            CliCommand::Probe { url, headers } => run_probe(&url, &headers)?,
            CliCommand::Parse { url, formats } => {
                let cfg = config::load_or_init()?;
                run_parse(&cfg, &url, &formats)?;
            }
            CliCommand::Download {
                url,
                formats,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                let dir = match output_dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_download(&cfg, &url, &formats, &dir)?;
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_config(&cfg)?;
            }
            CliCommand::Routes => run_routes(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
