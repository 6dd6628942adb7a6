use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chart styles this tool knows how to extract. The serde/display form is
/// the tag exactly as it appears in a `#NOTES:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "dance-single")]
    DanceSingle,
    #[serde(rename = "dance-double")]
    DanceDouble,
    #[serde(rename = "dance-couple")]
    DanceCouple,
    #[serde(rename = "dance-solo")]
    DanceSolo,
    #[serde(rename = "pump-single")]
    PumpSingle,
    #[serde(rename = "pump-double")]
    PumpDouble,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::DanceSingle,
        ChartType::DanceDouble,
        ChartType::DanceCouple,
        ChartType::DanceSolo,
        ChartType::PumpSingle,
        ChartType::PumpDouble,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ChartType::DanceSingle => "dance-single",
            ChartType::DanceDouble => "dance-double",
            ChartType::DanceCouple => "dance-couple",
            ChartType::DanceSolo => "dance-solo",
            ChartType::PumpSingle => "pump-single",
            ChartType::PumpDouble => "pump-double",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown chart type: {wanted}"))
    }
}

/// Difficulty tiers, named as they appear inside a chart header. User input
/// goes through [`FromStr`], which also accepts the historic aliases
/// (light/standard/heavy/expert/oni/novice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Challenge,
    Edit,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Challenge,
        Difficulty::Edit,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Challenge => "Challenge",
            Difficulty::Edit => "Edit",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "novice" => Ok(Difficulty::Beginner),
            "easy" | "light" => Ok(Difficulty::Easy),
            "medium" | "standard" => Ok(Difficulty::Medium),
            "hard" | "heavy" => Ok(Difficulty::Hard),
            "challenge" | "expert" | "oni" => Ok(Difficulty::Challenge),
            "edit" => Ok(Difficulty::Edit),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Format constants of the simfile dialect being processed. Passed
/// explicitly into the parsing and rebasing code so tests can run against
/// variants (a different beats-per-measure, alternative tag names) without
/// global state.
///
/// `beats_per_measure` is a single per-invocation value; mid-song time
/// signature changes are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    pub beats_per_measure: u32,
    pub chart_marker: String,
    pub separator: char,
    pub terminator: char,
    pub bpms_tag: String,
    pub stops_tag: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            beats_per_measure: 4,
            chart_marker: "#NOTES:".to_string(),
            separator: ',',
            terminator: ';',
            bpms_tag: "BPMS".to_string(),
            stops_tag: "STOPS".to_string(),
        }
    }
}

/// One extraction request: which chart, and which inclusive 0-indexed
/// measure range to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWindow {
    pub chart_type: ChartType,
    pub difficulty: Difficulty,
    pub measure_start: usize,
    pub measure_end: usize,
}

impl SelectionWindow {
    pub fn beat_start(&self, dialect: &Dialect) -> u64 {
        self.measure_start as u64 * dialect.beats_per_measure as u64
    }

    pub fn beat_end(&self, dialect: &Dialect) -> u64 {
        self.measure_end as u64 * dialect.beats_per_measure as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_serializes_as_file_tag() {
        let json = serde_json::to_value(ChartType::DanceSingle).unwrap();
        assert_eq!(json, "dance-single");
        let back: ChartType = serde_json::from_value(json).unwrap();
        assert_eq!(back, ChartType::DanceSingle);
    }

    #[test]
    fn chart_type_parses_its_own_tag() {
        for t in ChartType::ALL {
            assert_eq!(t.tag().parse::<ChartType>().unwrap(), t);
        }
        assert!("dance-triple".parse::<ChartType>().is_err());
    }

    #[test]
    fn difficulty_accepts_historic_aliases() {
        assert_eq!("heavy".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("light".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("standard".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("expert".parse::<Difficulty>().unwrap(), Difficulty::Challenge);
        assert_eq!("oni".parse::<Difficulty>().unwrap(), Difficulty::Challenge);
        assert_eq!("novice".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
    }

    #[test]
    fn difficulty_parsing_is_case_insensitive() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Challenge ".parse::<Difficulty>().unwrap(), Difficulty::Challenge);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn selection_window_beat_bounds_scale_by_dialect() {
        let window = SelectionWindow {
            chart_type: ChartType::DanceSingle,
            difficulty: Difficulty::Hard,
            measure_start: 1,
            measure_end: 4,
        };
        let dialect = Dialect::default();
        assert_eq!(window.beat_start(&dialect), 4);
        assert_eq!(window.beat_end(&dialect), 16);

        let waltz = Dialect {
            beats_per_measure: 3,
            ..Dialect::default()
        };
        assert_eq!(window.beat_start(&waltz), 3);
        assert_eq!(window.beat_end(&waltz), 12);
    }
}
