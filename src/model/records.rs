use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::model::aliases::{self, GameSideAliases};
use crate::model::normalize::{Record, collection, display_value, field_id, field_text, resolve};
use crate::model::stat::StatCode;

/// Shown for any text field the upstream record does not carry.
pub const MISSING: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamIdentity {
    pub id: Option<String>,
    pub name: String,
    pub abbreviation: String,
    /// `None` when the upstream record has no logo; the renderer substitutes the placeholder.
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: Option<String>,
    pub home: TeamIdentity,
    pub away: TeamIdentity,
    pub home_score: String,
    pub away_score: String,
    pub status: String,
    pub start_time: Option<DateTime<Utc>>,
    pub arena: String,
}

impl GameSummary {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let (home, home_score) = game_side(record, &aliases::HOME_SIDE);
        let (away, away_score) = game_side(record, &aliases::AWAY_SIDE);
        Self {
            game_id: field_id(record, aliases::GAME_ID),
            home,
            away,
            home_score,
            away_score,
            status: field_text(record, aliases::GAME_STATUS, ""),
            start_time: resolve(record, aliases::GAME_START)
                .and_then(Value::as_str)
                .and_then(parse_start_time),
            arena: field_text(record, aliases::GAME_ARENA, ""),
        }
    }
}

fn game_side(record: &Record, side: &GameSideAliases) -> (TeamIdentity, String) {
    let embedded = resolve(record, side.team).and_then(Value::as_object);
    let team = match embedded {
        Some(team) => TeamIdentity {
            id: field_id(team, aliases::TEAM_ID).or_else(|| field_id(record, side.team_id)),
            name: field_text(team, aliases::TEAM_NAME, MISSING),
            abbreviation: field_text(team, aliases::TEAM_ABBREVIATION, MISSING),
            logo: field_id(team, aliases::TEAM_LOGO).or_else(|| field_id(record, side.logo)),
        },
        None => TeamIdentity {
            id: field_id(record, side.team_id),
            name: field_text(record, side.team, MISSING),
            abbreviation: field_text(record, side.abbreviation, MISSING),
            logo: field_id(record, side.logo),
        },
    };
    let score = resolve(record, side.score)
        .or_else(|| embedded.and_then(|t| resolve(t, aliases::EMBEDDED_SCORE)))
        .map_or_else(|| "0".to_string(), display_value);
    (team, score)
}

/// Accepts RFC 3339 stamps and the offset-less ISO form the upstream emits; the latter is UTC.
#[must_use]
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Conference::East => "Eastern Conference",
            Conference::West => "Western Conference",
        }
    }

    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Conference::East => "standings-east",
            Conference::West => "standings-west",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsRow {
    pub team_id: Option<String>,
    pub team_name: String,
    pub wins: String,
    pub losses: String,
    pub games_back: String,
}

impl StandingsRow {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            team_id: field_id(record, aliases::TEAM_ID),
            team_name: field_text(record, aliases::TEAM_NAME, MISSING),
            wins: field_text(record, aliases::WINS, MISSING),
            losses: field_text(record, aliases::LOSSES, MISSING),
            games_back: field_text(record, aliases::GAMES_BACK, MISSING),
        }
    }
}

/// Rows stay in upstream order; rank is the position in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub east: Vec<StandingsRow>,
    pub west: Vec<StandingsRow>,
}

impl Standings {
    #[must_use]
    pub fn conference(&self, conference: Conference) -> &[StandingsRow] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.east.is_empty() && self.west.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderEntry {
    pub player_id: Option<String>,
    pub player_name: String,
    pub team: String,
    stats: BTreeMap<StatCode, String>,
}

impl LeaderEntry {
    /// Reads the requested stat columns; a stat missing under both spellings is left out.
    #[must_use]
    pub fn from_record(record: &Record, stats: &[StatCode]) -> Self {
        let values = stats
            .iter()
            .filter_map(|stat| {
                let keys = aliases::stat_keys(stat.code());
                let keys = [keys[0].as_str(), keys[1].as_str()];
                resolve(record, &keys).map(|value| (*stat, display_value(value)))
            })
            .collect();
        Self {
            player_id: field_id(record, aliases::PLAYER_ID),
            player_name: field_text(record, aliases::PLAYER_NAME, MISSING),
            team: field_text(record, aliases::PLAYER_TEAM, MISSING),
            stats: values,
        }
    }

    #[must_use]
    pub fn stat(&self, stat: StatCode) -> &str {
        self.stats.get(&stat).map_or(MISSING, String::as_str)
    }
}

/// Top entries per tracked stat for the home card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadersHome {
    pub by_stat: Vec<(StatCode, Vec<LeaderEntry>)>,
}

impl LeadersHome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_stat.iter().all(|(_, entries)| entries.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSummary {
    pub id: Option<String>,
    pub name: String,
    pub abbreviation: String,
    pub logo: Option<String>,
}

impl TeamSummary {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: field_id(record, aliases::TEAM_ID),
            name: field_text(record, aliases::TEAM_NAME, MISSING),
            abbreviation: field_text(record, aliases::TEAM_ABBREVIATION, MISSING),
            logo: field_id(record, aliases::TEAM_LOGO),
        }
    }
}

#[must_use]
pub fn games_from_scoreboard(body: &Value) -> Vec<GameSummary> {
    collection(body, "games")
        .into_iter()
        .map(GameSummary::from_record)
        .collect()
}

#[must_use]
pub fn standings_from_body(body: &Value) -> Standings {
    let Some(record) = body.as_object() else {
        return Standings::default();
    };
    let rows = |keys: &[&str]| -> Vec<StandingsRow> {
        resolve(record, keys)
            .map(|group| {
                collection(group, "data")
                    .into_iter()
                    .map(StandingsRow::from_record)
                    .collect()
            })
            .unwrap_or_default()
    };
    Standings {
        east: rows(aliases::EAST),
        west: rows(aliases::WEST),
    }
}

#[must_use]
pub fn leaders_home_from_body(body: &Value) -> LeadersHome {
    let by_stat = StatCode::TRACKED
        .iter()
        .map(|stat| {
            let entries = body
                .as_object()
                .and_then(|record| {
                    let keys = aliases::stat_keys(stat.code());
                    resolve(record, &[keys[0].as_str(), keys[1].as_str()])
                })
                .map(|group| {
                    collection(group, "data")
                        .into_iter()
                        .map(|r| LeaderEntry::from_record(r, &[*stat]))
                        .collect()
                })
                .unwrap_or_default();
            (*stat, entries)
        })
        .collect();
    LeadersHome { by_stat }
}

/// Columns for the leaders page. The tracked stats are always shown; a ranking stat outside
/// that set gets its own leading column.
#[must_use]
pub fn leader_columns(ranked_by: StatCode) -> Vec<StatCode> {
    let mut columns = Vec::with_capacity(StatCode::TRACKED.len() + 1);
    if !StatCode::TRACKED.contains(&ranked_by) {
        columns.push(ranked_by);
    }
    columns.extend(StatCode::TRACKED);
    columns
}

#[must_use]
pub fn leaders_from_body(body: &Value, ranked_by: StatCode) -> Vec<LeaderEntry> {
    let columns = leader_columns(ranked_by);
    collection(body, "data")
        .into_iter()
        .map(|r| LeaderEntry::from_record(r, &columns))
        .collect()
}

#[must_use]
pub fn teams_from_body(body: &Value) -> Vec<TeamSummary> {
    collection(body, "teams")
        .into_iter()
        .map(TeamSummary::from_record)
        .collect()
}
