use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Deserialize;
use tabled::Tabled;

/// Response body of the USNO `moon/phases/date` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MoonApiResponse {
    #[serde(default)]
    pub apiversion: String,
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub numphases: u32,
    pub phasedata: Vec<ApiPhase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhase {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub phase: MajorPhase,
    #[serde(default)]
    pub time: String,
}

/// One of the four instantaneous phases reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MajorPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
}

/// A dated major phase, as fetched from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseEvent {
    pub date: NaiveDate,
    pub phase: MajorPhase,
    /// Provider clock time (UT), only used for display.
    pub time: Option<String>,
}

impl PhaseEvent {
    pub fn new(date: NaiveDate, phase: MajorPhase) -> Self {
        Self {
            date,
            phase,
            time: None,
        }
    }
}

/// The eight named phases, in cycle order starting at new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl NamedPhase {
    pub const ALL: [NamedPhase; 8] = [
        NamedPhase::NewMoon,
        NamedPhase::WaxingCrescent,
        NamedPhase::FirstQuarter,
        NamedPhase::WaxingGibbous,
        NamedPhase::FullMoon,
        NamedPhase::WaningGibbous,
        NamedPhase::LastQuarter,
        NamedPhase::WaningCrescent,
    ];

    /// Canonical English name, e.g. `"Waxing Crescent"`.
    pub fn name(self) -> &'static str {
        match self {
            NamedPhase::NewMoon => "New Moon",
            NamedPhase::WaxingCrescent => "Waxing Crescent",
            NamedPhase::FirstQuarter => "First Quarter",
            NamedPhase::WaxingGibbous => "Waxing Gibbous",
            NamedPhase::FullMoon => "Full Moon",
            NamedPhase::WaningGibbous => "Waning Gibbous",
            NamedPhase::LastQuarter => "Last Quarter",
            NamedPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            NamedPhase::NewMoon => "🌑",
            NamedPhase::WaxingCrescent => "🌒",
            NamedPhase::FirstQuarter => "🌓",
            NamedPhase::WaxingGibbous => "🌔",
            NamedPhase::FullMoon => "🌕",
            NamedPhase::WaningGibbous => "🌖",
            NamedPhase::LastQuarter => "🌗",
            NamedPhase::WaningCrescent => "🌘",
        }
    }
}

impl From<MajorPhase> for NamedPhase {
    fn from(phase: MajorPhase) -> Self {
        match phase {
            MajorPhase::NewMoon => NamedPhase::NewMoon,
            MajorPhase::FirstQuarter => NamedPhase::FirstQuarter,
            MajorPhase::FullMoon => NamedPhase::FullMoon,
            MajorPhase::LastQuarter => NamedPhase::LastQuarter,
        }
    }
}

impl fmt::Display for MajorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NamedPhase::from(*self).name())
    }
}

impl fmt::Display for NamedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedPhase {
    type Err = String;

    /// Accepts the canonical name (`"Waxing Crescent"`) as well as the
    /// identifier form (`"WaxingCrescent"`), ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err("phase name cannot be empty".to_string());
        }

        NamedPhase::ALL
            .into_iter()
            .find(|phase| normalize(phase.name()) == wanted)
            .ok_or_else(|| format!("invalid phase name '{}'", s.trim()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// How a resolved phase is rendered on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Plaintext,
    #[default]
    Symbolic,
}

impl OutputMode {
    pub fn from_plaintext_flag(plaintext: bool) -> Self {
        if plaintext {
            OutputMode::Plaintext
        } else {
            OutputMode::Symbolic
        }
    }
}

/// The single persisted cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheRecord {
    pub date: NaiveDate,
    pub phase: NamedPhase,
}

#[derive(Tabled)]
pub struct PhaseEventTableRow {
    pub date: String,
    pub time: String,
    pub phase: String,
    pub symbol: String,
}
