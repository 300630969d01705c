use chrono::FixedOffset;
use std::str::FromStr;

pub const PLACEHOLDER_LOGO: &str = "/static/logo.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockStyle {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl ClockStyle {
    #[must_use]
    pub fn time_format(self) -> &'static str {
        match self {
            ClockStyle::TwelveHour => "%-I:%M %p",
            ClockStyle::TwentyFourHour => "%H:%M",
        }
    }
}

impl FromStr for ClockStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" | "12h" => Ok(ClockStyle::TwelveHour),
            "24" | "24h" => Ok(ClockStyle::TwentyFourHour),
            other => Err(format!("clock must be 12 or 24, got '{other}'")),
        }
    }
}

/// Everything the renderers need besides the data itself.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub clock: ClockStyle,
    /// Fixed offset start times are shown in. `None` follows the local zone, DST included.
    pub offset: Option<FixedOffset>,
    pub placeholder_logo: String,
}

impl RenderOptions {
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: ClockStyle) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clock: ClockStyle::default(),
            offset: None,
            placeholder_logo: PLACEHOLDER_LOGO.to_string(),
        }
    }
}
