use sm_schema::{Dialect, SelectionWindow};

use crate::timing::TimingMap;
use crate::ExtractError;

/// Rewrite the tempo-change and stop declarations in the metadata block so
/// beat offsets are relative to the start of the selected window. Every
/// other metadata byte passes through untouched.
pub fn rebase_metadata(
    metadata: &str,
    window: &SelectionWindow,
    dialect: &Dialect,
) -> Result<String, ExtractError> {
    let beat_start = window.beat_start(dialect);
    let beat_end = window.beat_end(dialect);
    let rewritten = rewrite_tag(metadata, &dialect.bpms_tag, beat_start, beat_end, dialect)?;
    // The stop declaration is located in the post-splice text; the first
    // rewrite may have shifted every offset after it.
    rewrite_tag(&rewritten, &dialect.stops_tag, beat_start, beat_end, dialect)
}

fn rewrite_tag(
    text: &str,
    tag: &str,
    beat_start: u64,
    beat_end: u64,
    dialect: &Dialect,
) -> Result<String, ExtractError> {
    let needle = format!("#{tag}:");
    let Some(decl) = text.find(&needle) else {
        return Err(ExtractError::MalformedTimingSection {
            tag: tag.to_string(),
            detail: "declaration not found in metadata".to_string(),
        });
    };
    let body_start = decl + needle.len();
    let Some(body_len) = text[body_start..].find(dialect.terminator) else {
        return Err(ExtractError::MalformedTimingSection {
            tag: tag.to_string(),
            detail: "unterminated declaration".to_string(),
        });
    };
    let body = &text[body_start..body_start + body_len];
    let rebased = TimingMap::decode(tag, body)?.rebase(beat_start, beat_end);

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..body_start]);
    out.push_str(&rebased.encode());
    out.push_str(&text[body_start + body_len..]);
    Ok(out)
}
