use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Tournament names containing any of these are treated as competitive;
/// everything else counts as a friendly or minor fixture.
const COMPETITIVE_KEYWORDS: &[&str] = &[
    "FIFA World Cup",
    "qualification",
    "Championship",
    "Cup of Nations",
    "Gold Cup",
    "Copa América",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::HomeWin, Outcome::Draw, Outcome::AwayWin];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::HomeWin => "Home Win",
            Outcome::Draw => "Draw",
            Outcome::AwayWin => "Away Win",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TournamentClass {
    Competitive,
    Friendly,
}

impl TournamentClass {
    pub const ALL: [TournamentClass; 2] = [TournamentClass::Competitive, TournamentClass::Friendly];

    pub fn label(self) -> &'static str {
        match self {
            TournamentClass::Competitive => "Competitive",
            TournamentClass::Friendly => "Friendly/Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginBand {
    Tight,
    Moderate,
    Decisive,
}

impl MarginBand {
    pub const ALL: [MarginBand; 3] = [MarginBand::Tight, MarginBand::Moderate, MarginBand::Decisive];

    pub fn from_margin(margin: u32) -> Self {
        match margin {
            0..=1 => MarginBand::Tight,
            2..=3 => MarginBand::Moderate,
            _ => MarginBand::Decisive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarginBand::Tight => "0-1 goal diff",
            MarginBand::Moderate => "2-3 goal diff",
            MarginBand::Decisive => "4+ goal diff",
        }
    }
}

/// Fixed 15-minute scoring bins. A missing minute has no period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPeriod {
    Min0To15,
    Min16To30,
    Min31To45,
    Min46To60,
    Min61To75,
    Min76Plus,
}

impl MatchPeriod {
    pub const ALL: [MatchPeriod; 6] = [
        MatchPeriod::Min0To15,
        MatchPeriod::Min16To30,
        MatchPeriod::Min31To45,
        MatchPeriod::Min46To60,
        MatchPeriod::Min61To75,
        MatchPeriod::Min76Plus,
    ];

    pub fn from_minute(minute: u32) -> Self {
        match minute {
            0..=15 => MatchPeriod::Min0To15,
            16..=30 => MatchPeriod::Min16To30,
            31..=45 => MatchPeriod::Min31To45,
            46..=60 => MatchPeriod::Min46To60,
            61..=75 => MatchPeriod::Min61To75,
            _ => MatchPeriod::Min76Plus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchPeriod::Min0To15 => "0-15 min",
            MatchPeriod::Min16To30 => "16-30 min",
            MatchPeriod::Min31To45 => "31-45 min",
            MatchPeriod::Min46To60 => "46-60 min",
            MatchPeriod::Min61To75 => "61-75 min",
            MatchPeriod::Min76Plus => "76-90+ min",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalMethod {
    OpenPlay,
    Penalty,
    OwnGoal,
}

impl GoalMethod {
    pub const ALL: [GoalMethod; 3] = [GoalMethod::OpenPlay, GoalMethod::Penalty, GoalMethod::OwnGoal];

    pub fn label(self) -> &'static str {
        match self {
            GoalMethod::OpenPlay => "Open Play",
            GoalMethod::Penalty => "Penalty Kick",
            GoalMethod::OwnGoal => "Own Goal",
        }
    }
}

/// One row of results.csv. Extra columns (city, country) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub tournament: String,
    #[serde(deserialize_with = "de_flag")]
    pub neutral: bool,
}

impl MatchRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn decade(&self) -> i32 {
        self.year() / 10 * 10
    }

    pub fn outcome(&self) -> Outcome {
        if self.home_score > self.away_score {
            Outcome::HomeWin
        } else if self.home_score < self.away_score {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home_score + self.away_score
    }

    pub fn goal_margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }

    pub fn margin_band(&self) -> MarginBand {
        MarginBand::from_margin(self.goal_margin())
    }

    pub fn tournament_class(&self) -> TournamentClass {
        if COMPETITIVE_KEYWORDS
            .iter()
            .any(|kw| self.tournament.contains(kw))
        {
            TournamentClass::Competitive
        } else {
            TournamentClass::Friendly
        }
    }
}

/// One row of goalscorers.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalRecord {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub team: String,
    #[serde(deserialize_with = "de_opt_text")]
    pub scorer: Option<String>,
    #[serde(deserialize_with = "de_opt_minute")]
    pub minute: Option<u32>,
    #[serde(deserialize_with = "de_flag")]
    pub own_goal: bool,
    #[serde(deserialize_with = "de_flag")]
    pub penalty: bool,
}

impl GoalRecord {
    pub fn period(&self) -> Option<MatchPeriod> {
        self.minute.map(MatchPeriod::from_minute)
    }

    /// Strict partition: a goal flagged as both penalty and own goal counts
    /// once, as a penalty.
    pub fn method(&self) -> GoalMethod {
        if self.penalty {
            GoalMethod::Penalty
        } else if self.own_goal {
            GoalMethod::OwnGoal
        } else {
            GoalMethod::OpenPlay
        }
    }
}

/// One row of shootouts.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct ShootoutRecord {
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub winner: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matches: Vec<MatchRecord>,
    pub goals: Vec<GoalRecord>,
    pub shootouts: Vec<ShootoutRecord>,
}

impl Dataset {
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            matches: read_table(&dir.join("results.csv"))?,
            goals: read_table(&dir.join("goalscorers.csv"))?,
            shootouts: read_table(&dir.join("shootouts.csv"))?,
        })
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open csv {}", path.display()))?;
    let mut out = Vec::new();
    for (idx, row) in reader.deserialize::<T>().enumerate() {
        // Row 1 is the header line.
        out.push(row.with_context(|| format!("decode row {} of {}", idx + 2, path.display()))?);
    }
    Ok(out)
}

fn de_date<'de, D>(de: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(serde::de::Error::custom)
}

fn de_flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "1" => Ok(true),
        "false" | "f" | "no" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unrecognised boolean {other:?}"
        ))),
    }
}

fn de_opt_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Minute columns show up as integers, floats ("47.0"), blank, or "NA".
fn de_opt_minute<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("unrecognised minute {trimmed:?}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "minute out of range {trimmed:?}"
        )));
    }
    Ok(Some(value.round() as u32))
}
