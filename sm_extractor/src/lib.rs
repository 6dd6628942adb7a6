pub mod document;
mod error;
pub mod locate;
pub mod rebase;
pub mod slice;
pub mod source;
pub mod timing;

pub use error::ExtractError;

use std::path::Path;

use sm_schema::{Dialect, SelectionWindow};

/// Run the whole extraction over raw simfile text: locate the requested
/// chart, slice the measure window, rebase the timing metadata, and
/// assemble the output simfile. Deterministic; the full result is built
/// before anything is handed to a writer.
pub fn extract_str(
    raw: &str,
    window: &SelectionWindow,
    dialect: &Dialect,
) -> Result<String, ExtractError> {
    let doc = document::SongDocument::parse(raw, dialect);
    let chart = locate::locate(raw, window.chart_type, window.difficulty, dialect)?;
    let selected = slice::slice(&chart.measures, window.measure_start, window.measure_end)?;
    let metadata = rebase::rebase_metadata(&doc.metadata, window, dialect)?;

    let mut out = String::with_capacity(metadata.len() + chart.header.len() + raw.len() / 4);
    out.push_str(&metadata);
    out.push_str(&chart.header);
    out.push_str(&slice::render(selected, dialect));
    out.push('\n');
    Ok(out)
}

/// Resolve the single `.sm` file in `dir` and extract from it.
pub fn extract_file(
    dir: &Path,
    window: &SelectionWindow,
    dialect: &Dialect,
) -> Result<String, ExtractError> {
    let (_path, contents) = source::read_source(dir)?;
    extract_str(&contents, window, dialect)
}

/// Default output name for an extracted slice.
pub fn output_filename(window: &SelectionWindow) -> String {
    format!("{}-{}.sm", window.chart_type, window.difficulty)
}
