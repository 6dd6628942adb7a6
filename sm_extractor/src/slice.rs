use sm_schema::Dialect;

use crate::ExtractError;

/// Select the inclusive measure range `[start, end]`. Out-of-range bounds
/// are an error, never clamped.
pub fn slice(measures: &[String], start: usize, end: usize) -> Result<&[String], ExtractError> {
    if start > end || end >= measures.len() {
        return Err(ExtractError::InvalidRange {
            start,
            end,
            len: measures.len(),
        });
    }
    Ok(&measures[start..=end])
}

/// Join measures back into a note-data block: the separator between
/// measures, the terminator once after the last.
pub fn render(measures: &[String], dialect: &Dialect) -> String {
    let mut out = String::new();
    for (i, measure) in measures.iter().enumerate() {
        if i > 0 {
            out.push(dialect.separator);
        }
        out.push_str(measure);
    }
    out.push(dialect.terminator);
    out
}
