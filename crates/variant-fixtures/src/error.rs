use std::path::PathBuf;

use datafusion_common::DataFusionError;
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Engine query error: {source}, query: {query}"))]
    EngineQuery {
        #[snafu(source(from(DataFusionError, Box::new)))]
        source: Box<DataFusionError>,
        query: String,
    },

    #[snafu(display("Query returned no rows: {query}"))]
    EmptyResult { query: String },

    #[snafu(display("TYPEOF returned non-text value {value} for query: {query}"))]
    NonTextTypeName { query: String, value: String },

    #[snafu(display("Round-trip mismatch for {expr}: {expected} != {actual}"))]
    RoundTripMismatch {
        expr: String,
        expected: String,
        actual: String,
    },

    #[snafu(display("Generated-data marker not found in {}", path.display()))]
    MarkerNotFound { path: PathBuf },

    #[snafu(display("Cannot read fixture file {}: {source}", path.display()))]
    ReadFixture {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Cannot write fixture file {}: {source}", path.display()))]
    WriteFixture {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
