use std::fmt;
use std::str::FromStr;

/// Codes the leaders endpoint accepts, in the order the filter control lists them.
pub const SUPPORTED_STATS: [&str; 14] = [
    "PTS", "REB", "AST", "BLK", "STL", "FGM", "FGA", "FG3M", "FG3A", "FTM", "FTA", "FG_PCT",
    "FG3_PCT", "FT_PCT",
];

/// A short uppercase statistic code such as `PTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatCode(&'static str);

impl StatCode {
    pub const PTS: StatCode = StatCode("PTS");
    pub const REB: StatCode = StatCode("REB");
    pub const AST: StatCode = StatCode("AST");

    /// Stats shown on the home leaders card and as fixed columns on the leaders page.
    pub const TRACKED: [StatCode; 3] = [StatCode::PTS, StatCode::REB, StatCode::AST];

    /// Case-insensitive lookup against [`SUPPORTED_STATS`].
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = input.trim().to_uppercase();
        SUPPORTED_STATS
            .into_iter()
            .find(|code| *code == wanted)
            .map(StatCode)
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        self.0
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            "PTS" => "Points",
            "REB" => "Rebounds",
            "AST" => "Assists",
            "BLK" => "Blocks",
            "STL" => "Steals",
            "FGM" => "Field Goals Made",
            "FGA" => "Field Goals Attempted",
            "FG3M" => "3PT Made",
            "FG3A" => "3PT Attempted",
            "FTM" => "Free Throws Made",
            "FTA" => "Free Throws Attempted",
            "FG_PCT" => "FG%",
            "FG3_PCT" => "3PT%",
            "FT_PCT" => "FT%",
            other => other,
        }
    }

    pub fn all() -> impl Iterator<Item = StatCode> {
        SUPPORTED_STATS.into_iter().map(StatCode)
    }
}

impl Default for StatCode {
    fn default() -> Self {
        StatCode::PTS
    }
}

impl fmt::Display for StatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for StatCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatCode::parse(s).ok_or_else(|| {
            format!(
                "unsupported stat '{s}', expected one of {}",
                SUPPORTED_STATS.join(", ")
            )
        })
    }
}
