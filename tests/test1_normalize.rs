use serde_json::{Value, json};

use gametrack::model::aliases;
use gametrack::model::{
    GameSummary, LeaderEntry, Record, StatCode, TeamSummary, field_text, games_from_scoreboard,
    leaders_from_body, leaders_home_from_body, parse_start_time, resolve, standings_from_body,
};

fn record(value: Value) -> Record {
    value.as_object().cloned().expect("object fixture")
}

#[test]
fn test1_team_name_resolves_from_every_alias() {
    for key in aliases::TEAM_NAME {
        let r = record(json!({ *key: "Boston Celtics" }));
        assert_eq!(field_text(&r, aliases::TEAM_NAME, "-"), "Boston Celtics", "alias {key}");
    }
    let empty = record(json!({ "unrelated": 1 }));
    assert_eq!(field_text(&empty, aliases::TEAM_NAME, "-"), "-");
}

#[test]
fn test1_zero_is_a_real_value_not_a_missing_one() {
    let r = record(json!({ "GamesBack": 0, "gamesBack": 4, "WINS": null, "wins": 12 }));
    assert_eq!(resolve(&r, aliases::GAMES_BACK), Some(&json!(0)));
    assert_eq!(field_text(&r, aliases::WINS, "-"), "12");
}

#[test]
fn test1_game_defaults_scores_and_leaves_logo_for_the_renderer() {
    let game = GameSummary::from_record(&record(json!({
        "GAME_ID": "0022500999",
        "homeTeam": "Boston Celtics",
        "awayTeam": "Miami Heat",
        "homeScore": 0
    })));
    assert_eq!(game.game_id.as_deref(), Some("0022500999"));
    assert_eq!(game.home_score, "0");
    assert_eq!(game.away_score, "0");
    assert_eq!(game.home.logo, None);
    assert_eq!(game.home.abbreviation, "-");
    assert_eq!(game.status, "");
    assert!(game.start_time.is_none());
}

#[test]
fn test1_game_accepts_embedded_team_objects() {
    let games = games_from_scoreboard(&json!({
        "games": [{
            "gameId": 42,
            "homeTeam": { "teamId": 1610612747, "teamName": "Lakers", "teamTricode": "LAL",
                          "logo": "/logos/lal.svg", "score": 101 },
            "visitorTeam": { "name": "Warriors", "abbreviation": "GSW", "points": 99 },
            "gameStatusText": "Final"
        }]
    }));
    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert_eq!(game.game_id.as_deref(), Some("42"));
    assert_eq!(game.home.name, "Lakers");
    assert_eq!(game.home.abbreviation, "LAL");
    assert_eq!(game.home.id.as_deref(), Some("1610612747"));
    assert_eq!(game.home.logo.as_deref(), Some("/logos/lal.svg"));
    assert_eq!(game.home_score, "101");
    assert_eq!(game.away.name, "Warriors");
    assert_eq!(game.away_score, "99");
    assert_eq!(game.status, "Final");
}

#[test]
fn test1_start_times_parse_with_and_without_offsets() {
    let naive = parse_start_time("2025-11-02T00:30:00").expect("naive stamp");
    let zoned = parse_start_time("2025-11-01T20:30:00-04:00").expect("zoned stamp");
    assert_eq!(naive, zoned);
    assert!(parse_start_time("7:30 pm ET").is_none());
}

#[test]
fn test1_standings_keep_upstream_order_and_mixed_spellings() {
    let standings = standings_from_body(&json!({
        "East": [
            { "TEAM_NAME": "Knicks", "W": 10, "L": 2, "GB": "-" },
            { "full_name": "Nets", "wins": 1, "losses": 11, "gamesBack": 9 }
        ],
        "west": []
    }));
    assert_eq!(standings.east.len(), 2);
    assert_eq!(standings.east[0].team_name, "Knicks");
    assert_eq!(standings.east[0].wins, "10");
    assert_eq!(standings.east[1].team_name, "Nets");
    assert_eq!(standings.east[1].games_back, "9");
    assert!(standings.west.is_empty());
    assert!(standings_from_body(&json!([])).is_empty());
}

#[test]
fn test1_leader_identifier_aliases_in_priority_order() {
    for key in ["PERSON_ID", "PLAYER_ID", "PID", "id"] {
        let entry = LeaderEntry::from_record(&record(json!({ key: 77, "PLAYER": "X" })), &[]);
        assert_eq!(entry.player_id.as_deref(), Some("77"), "alias {key}");
    }
    let both = LeaderEntry::from_record(&record(json!({ "id": 1610612744, "PLAYER_ID": 201939 })), &[]);
    assert_eq!(both.player_id.as_deref(), Some("201939"));
    let none = LeaderEntry::from_record(&record(json!({ "PLAYER": "No Id" })), &[]);
    assert_eq!(none.player_id, None);
}

#[test]
fn test1_leader_stats_accept_either_case_or_go_missing() {
    let entries = leaders_from_body(
        &json!({ "data": [{ "PLAYER_NAME": "N. Jokic", "reb": 12.4, "PTS": 0 }] }),
        StatCode::REB,
    );
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].stat(StatCode::REB), "12.4");
    assert_eq!(entries[0].stat(StatCode::PTS), "0");
    assert_eq!(entries[0].stat(StatCode::AST), "-");
}

#[test]
fn test1_homepage_leaders_group_by_tracked_stat() {
    let home = leaders_home_from_body(&json!({
        "PTS": [{ "PLAYER": "L. James", "TEAM": "LAL", "PTS": 30.1 }],
        "ast": [{ "PLAYER": "L. Doncic", "TEAM": "DAL", "AST": 9.8 }]
    }));
    let stats: Vec<StatCode> = home.by_stat.iter().map(|(s, _)| *s).collect();
    assert_eq!(stats, StatCode::TRACKED.to_vec());
    assert_eq!(home.by_stat[0].1[0].stat(StatCode::PTS), "30.1");
    assert!(home.by_stat[1].1.is_empty());
    assert_eq!(home.by_stat[2].1[0].team, "DAL");
}

#[test]
fn test1_team_summary_from_static_team_list() {
    let team = TeamSummary::from_record(&record(json!({
        "id": 1610612747, "full_name": "Los Angeles Lakers", "abbreviation": "LAL",
        "logoUrl": ""
    })));
    assert_eq!(team.id.as_deref(), Some("1610612747"));
    assert_eq!(team.name, "Los Angeles Lakers");
    assert_eq!(team.logo, None);
}
