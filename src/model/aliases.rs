//! Accepted upstream key spellings, most preferred first.

// scoreboard
pub const GAME_ID: &[&str] = &["gameId", "GAME_ID", "gameID", "id"];
pub const GAME_STATUS: &[&str] = &["gameStatus", "gameStatusText", "GAME_STATUS_TEXT", "status"];
pub const GAME_START: &[&str] = &["startTimeUTC", "startTime", "gameTimeUTC", "GAME_DATE_EST"];
pub const GAME_ARENA: &[&str] = &["arena", "arenaName", "ARENA"];

/// Keys describing one side of a game. The team key may hold either the display name or an
/// embedded team object.
#[derive(Debug, Clone, Copy)]
pub struct GameSideAliases {
    pub team: &'static [&'static str],
    pub team_id: &'static [&'static str],
    pub abbreviation: &'static [&'static str],
    pub logo: &'static [&'static str],
    pub score: &'static [&'static str],
}

pub const HOME_SIDE: GameSideAliases = GameSideAliases {
    team: &["homeTeam", "homeTeamName", "HOME_TEAM_NAME"],
    team_id: &["homeTeamId", "HOME_TEAM_ID"],
    abbreviation: &["homeAbbr", "homeTeamTricode", "HOME_TEAM_ABBREVIATION"],
    logo: &["homeLogo", "homeTeamLogo"],
    score: &["homeScore", "homeTeamScore", "HOME_PTS"],
};

pub const AWAY_SIDE: GameSideAliases = GameSideAliases {
    team: &["awayTeam", "visitorTeam", "awayTeamName", "VISITOR_TEAM_NAME"],
    team_id: &["awayTeamId", "visitorTeamId", "VISITOR_TEAM_ID"],
    abbreviation: &["awayAbbr", "awayTeamTricode", "VISITOR_TEAM_ABBREVIATION"],
    logo: &["awayLogo", "awayTeamLogo"],
    score: &["awayScore", "awayTeamScore", "VISITOR_PTS"],
};

pub const EMBEDDED_SCORE: &[&str] = &["score", "points", "PTS"];

// teams and standings
pub const TEAM_ID: &[&str] = &["TeamID", "teamId", "TEAM_ID", "id"];
pub const TEAM_NAME: &[&str] = &["TeamName", "teamName", "TEAM_NAME", "full_name", "fullName", "name"];
pub const TEAM_ABBREVIATION: &[&str] =
    &["TeamTricode", "teamTricode", "abbreviation", "TEAM_ABBREVIATION", "abbr"];
pub const TEAM_LOGO: &[&str] = &["logoUrl", "logoURL", "logo", "teamLogo"];
pub const WINS: &[&str] = &["WINS", "wins", "W"];
pub const LOSSES: &[&str] = &["LOSSES", "losses", "L"];
pub const GAMES_BACK: &[&str] = &["GamesBack", "gamesBack", "GB"];
pub const EAST: &[&str] = &["east", "East", "EAST"];
pub const WEST: &[&str] = &["west", "West", "WEST"];

// leaders
pub const PLAYER_ID: &[&str] = &["PERSON_ID", "PLAYER_ID", "PID", "id"];
pub const PLAYER_NAME: &[&str] = &["PLAYER_NAME", "PLAYER", "playerName", "name"];
pub const PLAYER_TEAM: &[&str] = &["TEAM_ABBREVIATION", "TEAM", "abbreviation", "teamTricode"];

/// Stat values are keyed by their code in either case.
#[must_use]
pub fn stat_keys(code: &str) -> [String; 2] {
    [code.to_uppercase(), code.to_lowercase()]
}
