use sm_schema::{ChartType, Difficulty};
use thiserror::Error;

/// Everything that can go wrong while extracting a slice. All of these are
/// fatal for the invocation; no output file is written once one occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("expected exactly one .sm file in {dir}, found {found}")]
    SourceResolution { dir: String, found: usize },

    #[error("no {chart_type} / {difficulty} chart in this simfile")]
    ChartNotFound {
        chart_type: ChartType,
        difficulty: Difficulty,
    },

    #[error("malformed #{tag}: section: {detail}")]
    MalformedTimingSection { tag: String, detail: String },

    #[error("measure range {start}..={end} out of bounds for a chart with {len} measures")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{path}: {message}")]
    Io { path: String, message: String },
}
