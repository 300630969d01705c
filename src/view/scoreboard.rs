use chrono::{DateTime, Local, Utc};
use maud::{Markup, html};

use crate::model::{GameSummary, TeamIdentity};
use crate::view::types::RenderOptions;
use crate::view::utils::{DetailKind, detail_href, empty_placeholder, logo_img};

pub const NO_GAMES: &str = "No games scheduled today.";

const LIVE_MARKERS: [&str; 4] = ["Qtr", "Half", "AM", "PM"];

#[must_use]
pub fn is_final(status: &str) -> bool {
    let status = status.to_lowercase();
    status.contains("final") || status.contains("completed")
}

/// Status strings that already read as a clock or period (`2nd Qtr`, `Half`, `7:30 PM`).
#[must_use]
pub fn looks_live(status: &str) -> bool {
    LIVE_MARKERS.iter().any(|marker| status.contains(marker))
}

/// Upcoming and live games first, then finished ones; upstream order kept inside each group.
#[must_use]
pub fn order_games(games: &[GameSummary]) -> Vec<&GameSummary> {
    let (finished, pending): (Vec<&GameSummary>, Vec<&GameSummary>) =
        games.iter().partition(|g| is_final(&g.status));
    pending.into_iter().chain(finished).collect()
}

#[must_use]
pub fn format_start_time(start: DateTime<Utc>, opts: &RenderOptions) -> String {
    let format = opts.clock.time_format();
    match opts.offset {
        Some(offset) => start.with_timezone(&offset).format(format).to_string(),
        // resolved per timestamp so dates across a DST change get their own offset
        None => start.with_timezone(&Local).format(format).to_string(),
    }
}

#[must_use]
pub fn status_text(game: &GameSummary, opts: &RenderOptions) -> String {
    if is_final(&game.status) {
        return "Final".to_string();
    }
    if looks_live(&game.status) {
        return game.status.clone();
    }
    match game.start_time {
        Some(start) => format_start_time(start, opts),
        None if !game.status.trim().is_empty() => game.status.clone(),
        None => "TBD".to_string(),
    }
}

fn render_side(team: &TeamIdentity, score: &str, side: &str, opts: &RenderOptions) -> Markup {
    html! {
        div class=(format!("game-team {side}")) {
            (logo_img(team.logo.as_deref(), &team.name, "team-logo", opts))
            span class="team-abbr" title=(team.name) { (team.abbreviation) }
            span class="team-score" { (score) }
        }
    }
}

#[must_use]
pub fn render_game_card(game: &GameSummary, opts: &RenderOptions) -> Markup {
    let state = if is_final(&game.status) {
        "final"
    } else if looks_live(&game.status) {
        "live"
    } else {
        "upcoming"
    };
    let body = html! {
        (render_side(&game.away, &game.away_score, "away", opts))
        (render_side(&game.home, &game.home_score, "home", opts))
        div class="game-status" { (status_text(game, opts)) }
        @if !game.arena.is_empty() {
            div class="game-arena" { (game.arena) }
        }
    };

    html! {
        @if let Some(href) = detail_href(DetailKind::Game, game.game_id.as_deref()) {
            a class="game-card clickable" href=(href) data-state=(state) { (body) }
        } @else {
            div class="game-card" data-state=(state) { (body) }
        }
    }
}

#[must_use]
pub fn render_scoreboard(games: &[GameSummary], opts: &RenderOptions) -> Markup {
    html! {
        @if games.is_empty() {
            (empty_placeholder(NO_GAMES))
        } @else {
            div class="games-grid" {
                @for game in order_games(games) {
                    (render_game_card(game, opts))
                }
            }
        }
    }
}
