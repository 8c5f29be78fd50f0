//! Lyrics document parser
//!
//! Accepts plain lyrics or synchronized lyrics in LRC format:
//! [mm:ss.xx] Lyrics line here
//!
//! Example:
//! [00:12.34] Hello world
//! [00:15.00] Another line

/// A single line of lyrics, timestamped when the source was synced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// Timestamp in milliseconds from start
    pub time_ms: Option<u64>,
    /// The lyrics text
    pub text: String,
}

impl LyricLine {
    pub fn new(time_ms: Option<u64>, text: String) -> Self {
        Self { time_ms, text }
    }
}

/// The full, ordered lyrics of one track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsDocument {
    pub lines: Vec<LyricLine>,
    /// Whether the lyrics carry timestamps
    pub synced: bool,
}

impl LyricsDocument {
    /// Parse plain or LRC formatted lyrics
    pub fn parse(content: &str, synced: bool) -> Self {
        let mut lines = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // Skip metadata tags like [ti:Title]
            if Self::parse_metadata(line).is_some() {
                continue;
            }

            if synced
                && let Some(parsed) = Self::parse_timed_line(line) {
                    lines.extend(parsed);
                    continue;
                }

            if !line.starts_with('[') {
                lines.push(LyricLine::new(None, line.to_string()));
            }
        }

        // Stable, so plain lyrics keep their order
        lines.sort_by_key(|l| l.time_ms);

        Self { lines, synced }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Line texts, in order, for the snippet locator
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Timestamp of line `index`, when synced
    pub fn time_of(&self, index: usize) -> Option<u64> {
        if !self.synced {
            return None;
        }
        self.lines.get(index).and_then(|l| l.time_ms)
    }

    /// Parse metadata tag like [ti:Title]
    fn parse_metadata(line: &str) -> Option<(String, String)> {
        if !line.starts_with('[') || !line.contains(':') {
            return None;
        }

        let end = line.find(']')?;
        let tag_content = &line[1..end];

        let colon_pos = tag_content.find(':')?;
        let tag = &tag_content[..colon_pos];

        // Metadata tags are typically 2-6 ascii letters (ti, ar, offset)
        if (2..=6).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphabetic()) {
            let value = tag_content[colon_pos + 1..].trim().to_string();
            return Some((tag.to_string(), value));
        }

        None
    }

    /// Parse a timed line like [00:12.34]Lyrics or [00:12.34][00:15.00]Lyrics
    fn parse_timed_line(line: &str) -> Option<Vec<LyricLine>> {
        let mut timestamps = Vec::new();
        let mut pos = 0;

        while pos < line.len() && line[pos..].starts_with('[') {
            let Some(end) = line[pos..].find(']') else {
                break;
            };
            let Some(ms) = Self::parse_timestamp(&line[pos + 1..pos + end]) else {
                break;
            };
            timestamps.push(ms);
            pos += end + 1;
        }

        if timestamps.is_empty() {
            return None;
        }

        let text = line[pos..].trim().to_string();
        if text.is_empty() {
            // Instrumental gap marker
            return Some(Vec::new());
        }

        Some(
            timestamps
                .into_iter()
                .map(|ts| LyricLine::new(Some(ts), text.clone()))
                .collect(),
        )
    }

    /// Parse timestamp string like "00:12.34" or "00:12:34" to milliseconds
    fn parse_timestamp(s: &str) -> Option<u64> {
        let parts: Vec<&str> = s.split([':', '.']).collect();

        match parts.len() {
            2 => {
                let min: u64 = parts[0].parse().ok()?;
                let sec: u64 = parts[1].parse().ok()?;
                Some(min * 60 * 1000 + sec * 1000)
            }
            3 => {
                let min: u64 = parts[0].parse().ok()?;
                let sec: u64 = parts[1].parse().ok()?;
                let frac = parts[2];
                // "3" tenths, "34" centiseconds, "340" milliseconds
                let ms: u64 = match frac.len() {
                    1 => frac.parse::<u64>().ok()? * 100,
                    2 => frac.parse::<u64>().ok()? * 10,
                    3 => frac.parse().ok()?,
                    _ => return None,
                };
                Some(min * 60 * 1000 + sec * 1000 + ms)
            }
            _ => None,
        }
    }
}
