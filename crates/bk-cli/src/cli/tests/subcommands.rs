//! Parse tests for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_filename() {
    match parse(&["bk", "filename", "attachment; filename=\"report.pdf\""]) {
        CliCommand::Filename { header_value } => {
            assert_eq!(header_value, "attachment; filename=\"report.pdf\"")
        }
        _ => panic!("expected Filename"),
    }
}

#[test]
fn cli_parse_filename_requires_value() {
    assert!(Cli::try_parse_from(["bk", "filename"]).is_err());
}

#[test]
fn cli_parse_probe() {
    match parse(&["bk", "probe", "https://example.com/blog.zip"]) {
        CliCommand::Probe { url, headers } => {
            assert_eq!(url, "https://example.com/blog.zip");
            assert!(headers.is_empty());
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_probe_headers() {
    match parse(&[
        "bk",
        "probe",
        "https://example.com/x",
        "-H",
        "Authorization: Bearer t",
        "--header",
        "Accept: */*",
    ]) {
        CliCommand::Probe { headers, .. } => {
            assert_eq!(headers, ["Authorization: Bearer t", "Accept: */*"]);
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_parse_default_format() {
    match parse(&["bk", "parse", "https://blog.example.com/p/1"]) {
        CliCommand::Parse { url, formats } => {
            assert_eq!(url, "https://blog.example.com/p/1");
            assert_eq!(formats, ["md"]);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_download() {
    match parse(&[
        "bk",
        "download",
        "https://blog.example.com/p/1",
        "-f",
        "pdf",
        "--format",
        "html",
        "-o",
        "/tmp/out",
    ]) {
        CliCommand::Download {
            url,
            formats,
            output_dir,
        } => {
            assert_eq!(url, "https://blog.example.com/p/1");
            assert_eq!(formats, ["pdf", "html"]);
            assert_eq!(output_dir.as_deref(), Some(std::path::Path::new("/tmp/out")));
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_defaults() {
    match parse(&["bk", "download", "https://blog.example.com/p/1"]) {
        CliCommand::Download {
            formats, output_dir, ..
        } => {
            assert_eq!(formats, ["md"]);
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_config_and_routes() {
    assert!(matches!(parse(&["bk", "config"]), CliCommand::Config));
    assert!(matches!(parse(&["bk", "routes"]), CliCommand::Routes));
}

#[test]
fn cli_parse_unknown_subcommand() {
    assert!(Cli::try_parse_from(["bk", "upload"]).is_err());
}
