use sm_schema::Dialect;

/// A simfile split into the song-wide metadata block and the raw chart
/// sections that follow. The split is lossless: metadata followed by the
/// sections in order reproduces the input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongDocument {
    pub metadata: String,
    pub charts: Vec<String>,
}

impl SongDocument {
    /// Split at the chart-marker occurrences. Each section runs from its
    /// marker up to the next marker (or end of input), so inter-chart
    /// comment banners stay attached to the section they follow.
    pub fn parse(raw: &str, dialect: &Dialect) -> SongDocument {
        let marks: Vec<usize> = raw
            .match_indices(dialect.chart_marker.as_str())
            .map(|(i, _)| i)
            .collect();
        let Some(&first) = marks.first() else {
            return SongDocument {
                metadata: raw.to_string(),
                charts: Vec::new(),
            };
        };
        let mut charts = Vec::with_capacity(marks.len());
        for (i, &start) in marks.iter().enumerate() {
            let end = marks.get(i + 1).copied().unwrap_or(raw.len());
            charts.push(raw[start..end].to_string());
        }
        SongDocument {
            metadata: raw[..first].to_string(),
            charts,
        }
    }
}
