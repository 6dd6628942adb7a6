use serde::Serialize;
use sm_schema::{ChartType, Dialect, Difficulty};

use crate::ExtractError;

/// One chart pulled out of a simfile: its `#NOTES:` header block and the
/// note data split into measures. Measure contents are opaque and kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedChart {
    pub header: String,
    pub measures: Vec<String>,
}

/// Summary row for chart listings. Tags are reported as the file spells
/// them, so charts of types this tool does not extract still show up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartInfo {
    pub chart_type: String,
    pub description: String,
    pub difficulty: String,
    pub meter: String,
    pub measures: usize,
}

/// The five declaration lines after a `#NOTES:` marker: chart type,
/// description, difficulty, meter, groove radar. Each must end with `:`.
struct HeaderMatch<'a> {
    fields: [&'a str; 5],
    len: usize,
}

fn parse_header(after: &str) -> Option<HeaderMatch<'_>> {
    // The remainder of the marker line must be blank; the fields start on
    // the next line.
    let first_break = after.find('\n')?;
    if !after[..first_break].trim().is_empty() {
        return None;
    }
    let mut pos = first_break + 1;
    let mut fields = [""; 5];
    for field in &mut fields {
        let rest = &after[pos..];
        let line_end = rest.find('\n')?;
        let line = rest[..line_end].trim();
        *field = line.strip_suffix(':')?.trim();
        pos += line_end + 1;
    }
    Some(HeaderMatch { fields, len: pos })
}

fn split_measures(span: &str, dialect: &Dialect) -> Vec<String> {
    let mut measures: Vec<String> = span
        .split(dialect.separator)
        .map(str::to_string)
        .collect();
    // Splitting on both the separator and the terminator leaves one empty
    // trailing piece when the note data ends with a separator; drop it.
    if measures.len() > 1 && measures.last().is_some_and(|m| m.trim().is_empty()) {
        measures.pop();
    }
    measures
}

/// Find the one chart matching both the requested type and difficulty.
/// Candidates that fail the header grammar or have no terminator are
/// skipped, the same as a non-matching pair.
pub fn locate(
    raw: &str,
    chart_type: ChartType,
    difficulty: Difficulty,
    dialect: &Dialect,
) -> Result<LocatedChart, ExtractError> {
    for (start, _) in raw.match_indices(dialect.chart_marker.as_str()) {
        let after = &raw[start + dialect.chart_marker.len()..];
        let Some(header) = parse_header(after) else {
            continue;
        };
        if header.fields[0] != chart_type.tag() || header.fields[2] != difficulty.tag() {
            continue;
        }
        let body = &after[header.len..];
        let Some(note_len) = body.find(dialect.terminator) else {
            continue;
        };
        let header_text = raw[start..start + dialect.chart_marker.len() + header.len].to_string();
        return Ok(LocatedChart {
            header: header_text,
            measures: split_measures(&body[..note_len], dialect),
        });
    }
    Err(ExtractError::ChartNotFound {
        chart_type,
        difficulty,
    })
}

/// Inventory of every well-formed chart in the document, in file order.
pub fn list_charts(raw: &str, dialect: &Dialect) -> Vec<ChartInfo> {
    let mut out = Vec::new();
    for (start, _) in raw.match_indices(dialect.chart_marker.as_str()) {
        let after = &raw[start + dialect.chart_marker.len()..];
        let Some(header) = parse_header(after) else {
            continue;
        };
        let body = &after[header.len..];
        let Some(note_len) = body.find(dialect.terminator) else {
            continue;
        };
        out.push(ChartInfo {
            chart_type: header.fields[0].to_string(),
            description: header.fields[1].to_string(),
            difficulty: header.fields[2].to_string(),
            meter: header.fields[3].to_string(),
            measures: split_measures(&body[..note_len], dialect).len(),
        });
    }
    out
}
