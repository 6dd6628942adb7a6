use std::cmp::Ordering;
use std::fmt;

use crate::ExtractError;

const MAX_SCALE: u8 = 9;

/// A beat offset as written in a `#BPMS:`/`#STOPS:` pair.
///
/// Beats are decimal text in the file (`16.000`, `0.5`). They are stored as
/// a scaled integer so a value re-encodes with the digit count it came in
/// with, and shifting by a whole number of beats never disturbs the
/// fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    mantissa: i64,
    scale: u8,
}

impl Beat {
    pub fn parse(s: &str) -> Option<Beat> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if frac.len() > MAX_SCALE as usize {
            return None;
        }
        let mut mantissa: i64 = 0;
        for c in whole.chars().chain(frac.chars()) {
            let digit = c.to_digit(10)? as i64;
            mantissa = mantissa.checked_mul(10)?.checked_add(digit)?;
        }
        if negative {
            mantissa = -mantissa;
        }
        Some(Beat {
            mantissa,
            scale: frac.len() as u8,
        })
    }

    fn pow10(scale: u8) -> i128 {
        10i128.pow(scale as u32)
    }

    /// Compare against a whole number of beats.
    pub fn cmp_whole(&self, n: u64) -> Ordering {
        (self.mantissa as i128).cmp(&(n as i128 * Self::pow10(self.scale)))
    }

    /// Shift down by a whole number of beats, keeping the decimal scale.
    /// Only meaningful when `self >= n`.
    pub fn sub_whole(&self, n: u64) -> Beat {
        let shifted = self.mantissa as i128 - n as i128 * Self::pow10(self.scale);
        Beat {
            mantissa: shifted as i64,
            scale: self.scale,
        }
    }
}

impl fmt::Display for Beat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }
        let pow = Self::pow10(self.scale) as u128;
        let abs = self.mantissa.unsigned_abs() as u128;
        let sign = if self.mantissa < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / pow,
            abs % pow,
            width = self.scale as usize
        )
    }
}

/// One `beat=value` pair. The value is checked to be numeric but kept
/// verbatim; only beats are ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingEntry {
    pub beat: Beat,
    pub value: String,
}

/// A beat-indexed event list (`#BPMS:` tempo changes or `#STOPS:` pause
/// durations), in the order the file declares it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimingMap {
    pub entries: Vec<TimingEntry>,
}

impl TimingMap {
    /// Decode the body of a timing declaration (the text between `:` and
    /// `;`). An empty body is a valid empty map; `#STOPS:;` is common.
    pub fn decode(tag: &str, body: &str) -> Result<TimingMap, ExtractError> {
        let mut entries = Vec::new();
        if body.trim().is_empty() {
            return Ok(TimingMap { entries });
        }
        let pieces: Vec<&str> = body.split(',').collect();
        let last = pieces.len() - 1;
        for (i, piece) in pieces.iter().enumerate() {
            let pair = piece.trim();
            if pair.is_empty() {
                // A trailing separator leaves one empty artifact; anything
                // else empty is a broken declaration.
                if i == last {
                    continue;
                }
                return Err(malformed(tag, format!("empty pair at position {i}")));
            }
            let Some((beat_text, value)) = pair.split_once('=') else {
                return Err(malformed(tag, format!("pair without '=': {pair}")));
            };
            let beat_text = beat_text.trim();
            let value = value.trim();
            let Some(beat) = Beat::parse(beat_text) else {
                return Err(malformed(tag, format!("bad beat offset: {beat_text}")));
            };
            if value.is_empty() || value.parse::<f64>().is_err() {
                return Err(malformed(tag, format!("bad value: {pair}")));
            }
            entries.push(TimingEntry {
                beat,
                value: value.to_string(),
            });
        }
        Ok(TimingMap { entries })
    }

    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}={}", e.beat, e.value))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Keep entries inside the closed beat window `[beat_start, beat_end]`
    /// and shift them so the window start becomes beat zero. Entry order is
    /// preserved. The upper bound is inclusive, matching the historical
    /// behavior of this tool.
    pub fn rebase(&self, beat_start: u64, beat_end: u64) -> TimingMap {
        let entries = self
            .entries
            .iter()
            .filter(|e| {
                e.beat.cmp_whole(beat_start) != Ordering::Less
                    && e.beat.cmp_whole(beat_end) != Ordering::Greater
            })
            .map(|e| TimingEntry {
                beat: e.beat.sub_whole(beat_start),
                value: e.value.clone(),
            })
            .collect();
        TimingMap { entries }
    }
}

fn malformed(tag: &str, detail: String) -> ExtractError {
    ExtractError::MalformedTimingSection {
        tag: tag.to_string(),
        detail,
    }
}
